//! Data models for Habitica API payloads

use crate::error::{HabiticaError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Task type enumeration
///
/// Habitica partitions every task into exactly one of these four kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskType {
    #[serde(rename = "habit")]
    Habit,
    #[serde(rename = "daily")]
    Daily,
    #[serde(rename = "todo")]
    Todo,
    #[serde(rename = "reward")]
    Reward,
}

impl TaskType {
    /// All task types, in the order they are exported
    pub const ALL: [Self; 4] = [Self::Habit, Self::Daily, Self::Todo, Self::Reward];

    /// The `type` tag as it appears on the wire
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Habit => "habit",
            Self::Daily => "daily",
            Self::Todo => "todo",
            Self::Reward => "reward",
        }
    }

    /// Default output file name for this task type
    #[must_use]
    pub const fn default_file_name(self) -> &'static str {
        match self {
            Self::Habit => "habits.csv",
            Self::Daily => "dailies.csv",
            Self::Todo => "todos.csv",
            Self::Reward => "rewards.csv",
        }
    }
}

impl std::str::FromStr for TaskType {
    type Err = HabiticaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "habit" => Ok(Self::Habit),
            "daily" => Ok(Self::Daily),
            "todo" => Ok(Self::Todo),
            "reward" => Ok(Self::Reward),
            _ => Err(HabiticaError::api(format!("Unknown task type: {s}"))),
        }
    }
}

impl std::fmt::Display for TaskType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Envelope the Habitica v3 API wraps around every payload
///
/// A response that decodes but carries `success == false` is an API-level
/// failure, distinct from a transport failure (which surfaces as no
/// response at all).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    /// API-level success indicator
    #[serde(default)]
    pub success: bool,
    /// The payload: an array of task records or a user profile object
    #[serde(default)]
    pub data: Value,
}

impl ApiResponse {
    /// The payload as a task list, empty when the payload is not an array
    #[must_use]
    pub fn task_list(&self) -> Vec<Value> {
        self.data.as_array().cloned().unwrap_or_default()
    }
}

/// Read the `type` tag of a raw task record
#[must_use]
pub fn task_type_of(record: &Value) -> Option<TaskType> {
    record
        .get("type")
        .and_then(Value::as_str)
        .and_then(|tag| tag.parse().ok())
}
