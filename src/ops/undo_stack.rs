use crate::model::task::TaskRecord;
use crate::ops::error::{Buffer, TaskError};

/// Last-in/first-out buffer of deleted tasks. Unbounded.
#[derive(Debug, Clone, Default)]
pub struct UndoStack {
    records: Vec<TaskRecord>,
}

impl UndoStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: TaskRecord) {
        self.records.push(record);
    }

    /// Remove and return the most recently pushed record
    pub fn pop(&mut self) -> Result<TaskRecord, TaskError> {
        self.records.pop().ok_or(TaskError::Empty(Buffer::UndoStack))
    }

    pub fn peek(&self) -> Option<&TaskRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
