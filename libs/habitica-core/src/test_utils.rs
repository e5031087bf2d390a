//! Test fixtures mirroring Habitica API payloads

use chrono::{TimeZone, Utc};
use serde_json::{json, Value};
use uuid::Uuid;

fn timestamp(hour: u32) -> String {
    Utc.with_ymd_and_hms(2024, 3, 1, hour, 0, 0)
        .unwrap()
        .to_rfc3339()
}

/// A habit record carrying every counter field
#[must_use]
pub fn sample_habit() -> Value {
    json!({
        "id": Uuid::new_v4().to_string(),
        "type": "habit",
        "text": "Drink water",
        "notes": "Eight glasses",
        "priority": 1,
        "createdAt": timestamp(8),
        "updatedAt": timestamp(9),
        "up": true,
        "down": false,
        "counterUp": 12,
        "counterDown": 3,
        // fields outside the fixed header, silently dropped on export
        "frequency": "daily",
        "history": [{"date": 1_700_000_000_000u64, "value": 1.0}]
    })
}

/// A daily record that belongs to a challenge
#[must_use]
pub fn sample_daily_with_challenge() -> Value {
    json!({
        "id": Uuid::new_v4().to_string(),
        "type": "daily",
        "text": "Morning stretch",
        "notes": "",
        "priority": 1.5,
        "createdAt": timestamp(7),
        "updatedAt": timestamp(7),
        "streak": 14,
        "completed": true,
        "challenge": {"id": "c1", "shortName": "SN"}
    })
}

/// A todo record with some common fields missing
#[must_use]
pub fn sample_todo() -> Value {
    json!({
        "id": Uuid::new_v4().to_string(),
        "type": "todo",
        "text": "File taxes",
        "completed": false,
        "date": "2024-04-15"
    })
}

/// A reward record with only common fields
#[must_use]
pub fn sample_reward() -> Value {
    json!({
        "id": Uuid::new_v4().to_string(),
        "type": "reward",
        "text": "One episode",
        "notes": "Guilt-free",
        "priority": 1,
        "createdAt": timestamp(10),
        "updatedAt": timestamp(10),
        "value": 10
    })
}

/// A mixed task list covering all four types
#[must_use]
pub fn sample_tasks() -> Vec<Value> {
    vec![
        sample_habit(),
        sample_daily_with_challenge(),
        sample_todo(),
        sample_reward(),
        sample_habit(),
    ]
}

/// A profile `data` object with nested stats and achievements
#[must_use]
pub fn sample_profile() -> Value {
    json!({
        "stats": {
            "hp": 50,
            "exp": 1240,
            "lvl": 18,
            "class": "wizard",
            "training": {"str": 3, "int": 7},
            "buffs": {"str": 0, "stealth": 0}
        },
        "achievements": {
            "streak": 21,
            "perfect": 4,
            "quests": {"dilatory": 1, "stressbeast": 2},
            "ultimateGearSets": {"healer": false, "wizard": true}
        },
        "auth": {"local": {"username": "tester"}}
    })
}

/// A successful `/tasks/user` response envelope
#[must_use]
pub fn tasks_response() -> Value {
    json!({"success": true, "data": sample_tasks()})
}

/// A successful `/user` response envelope
#[must_use]
pub fn profile_response() -> Value {
    json!({"success": true, "data": sample_profile()})
}

/// A decoded response whose API-level success flag is false
#[must_use]
pub fn failed_response() -> Value {
    json!({"success": false, "error": "NotAuthorized", "message": "invalid credentials"})
}
