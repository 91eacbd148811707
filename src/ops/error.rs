use std::fmt;

/// The buffer a pop or dequeue found empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Buffer {
    UndoStack,
    UrgentQueue,
}

impl fmt::Display for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Buffer::UndoStack => f.write_str("undo stack"),
            Buffer::UrgentQueue => f.write_str("urgent queue"),
        }
    }
}

/// Error type for board and task-list operations
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    #[error("task not found: {0}")]
    NotFound(String),
    #[error("{0} is empty")]
    Empty(Buffer),
    #[error("task name must not be blank")]
    EmptyInput,
    #[error("invalid due date {value:?} (expected YYYY-MM-DD HH:MM:SS): {source}")]
    Format {
        value: String,
        source: chrono::ParseError,
    },
    #[error("invalid priority {0:?} (expected low, medium or high)")]
    InvalidPriority(String),
}
