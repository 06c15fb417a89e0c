// Data models for the task list

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Task identifier: the creation timestamp in milliseconds since the Unix
/// epoch, bumped past the current maximum when two tasks land in the same
/// millisecond. Unique within a store and stable across restarts.
pub type TaskId = i64;

/// A single to-do item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub category: String,
    pub priority: Priority,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a pending task stamped with the current time.
    pub fn new(id: TaskId, text: impl Into<String>, category: impl Into<String>, priority: Priority) -> Self {
        Self {
            id,
            text: text.into(),
            category: category.into(),
            priority,
            completed: false,
            created_at: Utc::now(),
        }
    }
}

/// Task priority level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Parses the exact lowercase names `low`, `medium`, `high`.
    /// Other casings and surrounding whitespace are rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Capitalized form used in the exported document.
    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Priority::parse(raw)
            .ok_or_else(|| format!("invalid priority '{raw}' (expected low, medium, or high)"))
    }
}

/// Helper function to get current timestamp in milliseconds
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}
