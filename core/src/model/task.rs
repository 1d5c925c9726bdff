use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Lenient parse for user input: accepts the canonical names plus
    /// single-letter aliases, case-insensitive.
    pub fn parse_alias(input: &str) -> Result<Self, ParsePriorityError> {
        match input.to_lowercase().as_str() {
            "h" | "high" => Ok(Priority::High),
            "m" | "med" | "medium" => Ok(Priority::Medium),
            "l" | "low" => Ok(Priority::Low),
            _ => Err(ParsePriorityError::Unknown(input.to_string())),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParsePriorityError {
    #[error("unknown priority '{0}' (expected low, medium or high)")]
    Unknown(String),
}

/// Exact match only. Anything outside `low`/`medium`/`high` is rejected.
impl FromStr for Priority {
    type Err = ParsePriorityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Priority::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ParsePriorityError::Unknown(s.to_string()))
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    title: String,
    priority: Priority,
    completed: bool,
    created_at: DateTime<Utc>,
}

impl Task {
    /// Only the store hands out ids, so construction stays crate-private.
    pub(crate) fn new(id: TaskId, title: String, priority: Priority) -> Self {
        Self {
            id,
            title,
            priority,
            completed: false,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn toggle_complete(&mut self) -> bool {
        self.completed = !self.completed;
        debug!(id = %self.id, completed = self.completed, "toggled task");
        self.completed
    }

    /// Returns false and leaves the task untouched when `new_priority`
    /// is not one of `low`, `medium`, `high`.
    pub fn update_priority(&mut self, new_priority: &str) -> bool {
        match new_priority.parse::<Priority>() {
            Ok(priority) => {
                self.set_priority(priority);
                true
            }
            Err(e) => {
                warn!(id = %self.id, "rejected priority update: {}", e);
                false
            }
        }
    }

    pub fn set_priority(&mut self, priority: Priority) {
        debug!(id = %self.id, from = %self.priority, to = %priority, "priority changed");
        self.priority = priority;
    }
}
