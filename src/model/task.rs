use std::fmt;
use std::str::FromStr;

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::ops::error::TaskError;

/// The one textual timestamp format accepted for due dates
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Task priority, lowest first
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String")]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    /// Next priority in the selector order (wraps High → Low)
    pub fn next(self) -> Priority {
        match self {
            Priority::Low => Priority::Medium,
            Priority::Medium => Priority::High,
            Priority::High => Priority::Low,
        }
    }

    /// Previous priority in the selector order (wraps Low → High)
    pub fn prev(self) -> Priority {
        match self {
            Priority::Low => Priority::High,
            Priority::Medium => Priority::Low,
            Priority::High => Priority::Medium,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(TaskError::InvalidPriority(s.trim().to_string())),
        }
    }
}

impl TryFrom<String> for Priority {
    type Error = TaskError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Completion state of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    Pending,
    Completed,
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskStatus::Pending => f.write_str("Pending"),
            TaskStatus::Completed => f.write_str("Completed"),
        }
    }
}

/// One to-do entry. `name` is the only identity; it is not unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub name: String,
    /// Due date in [`DUE_DATE_FORMAT`]
    pub due_date: String,
    pub priority: Priority,
    pub status: TaskStatus,
}

impl TaskRecord {
    /// A new pending task
    pub fn new(name: impl Into<String>, due_date: impl Into<String>, priority: Priority) -> Self {
        TaskRecord {
            name: name.into(),
            due_date: due_date.into(),
            priority,
            status: TaskStatus::Pending,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }

    /// Parse this record's due date
    pub fn due(&self) -> Result<NaiveDateTime, TaskError> {
        parse_due_date(&self.due_date)
    }
}

/// Parse a due date string in the fixed `YYYY-MM-DD HH:MM:SS` format
pub fn parse_due_date(value: &str) -> Result<NaiveDateTime, TaskError> {
    NaiveDateTime::parse_from_str(value, DUE_DATE_FORMAT).map_err(|source| TaskError::Format {
        value: value.to_string(),
        source,
    })
}

/// The current local time in the due-date format
pub fn now_due_date() -> String {
    Local::now().format(DUE_DATE_FORMAT).to_string()
}
