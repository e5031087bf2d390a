//! Flattening of nested JSON records into single-level column maps

use serde_json::{Map, Value};

/// Hoist the nested `challenge` object one level up
///
/// Each key of the `challenge` sub-object is copied into the parent
/// record under a `challenge_<key>` name. Only one level is hoisted and
/// collisions with existing keys are not guarded against; the last write
/// wins. Records without a `challenge` object pass through unchanged.
#[must_use]
pub fn hoist_challenge(mut record: Map<String, Value>) -> Map<String, Value> {
    if let Some(Value::Object(challenge)) = record.get("challenge").cloned() {
        for (key, value) in challenge {
            record.insert(format!("challenge_{key}"), value);
        }
    }
    record
}

/// Recursively flatten a nested map into dot-joined key paths
///
/// Objects are descended into at any depth; everything else, arrays
/// included, is a leaf. `{"hp": 50, "training": {"str": 3}}` flattens to
/// the keys `hp` and `training.str`.
#[must_use]
pub fn flatten_nested(map: &Map<String, Value>) -> Map<String, Value> {
    let mut flat = Map::new();
    flatten_into(&mut flat, None, map);
    flat
}

fn flatten_into(flat: &mut Map<String, Value>, prefix: Option<&str>, map: &Map<String, Value>) {
    for (key, value) in map {
        let path = match prefix {
            Some(prefix) => format!("{prefix}.{key}"),
            None => key.clone(),
        };
        match value {
            Value::Object(nested) => flatten_into(flat, Some(&path), nested),
            other => {
                flat.insert(path, other.clone());
            }
        }
    }
}

/// Render a field value as a CSV cell
///
/// Strings are written bare, numbers and booleans via their display
/// form, and null or missing values as an empty cell. Arrays and
/// objects are serialized as compact JSON rather than exploded into
/// further columns.
#[must_use]
pub fn render_cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(other) => other.to_string(),
    }
}
