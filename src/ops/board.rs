use tracing::debug;

use crate::model::task::{Priority, TaskRecord, parse_due_date};
use crate::ops::error::TaskError;
use crate::ops::search::filter_tasks;
use crate::ops::task_list::TaskList;
use crate::ops::undo_stack::UndoStack;
use crate::ops::urgent_queue::UrgentQueue;

/// The whole application state: the task list, the undo stack of deleted
/// tasks, and the urgent queue. Each method handles one user action.
#[derive(Debug, Clone, Default)]
pub struct Board {
    tasks: TaskList,
    undo: UndoStack,
    urgent: UrgentQueue,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pending task at the end of the list. The name is trimmed.
    pub fn add_task(&mut self, name: &str, due_date: &str, priority: Priority) -> Result<(), TaskError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TaskError::EmptyInput);
        }
        parse_due_date(due_date)?;
        self.tasks.add(name, due_date, priority);
        debug!(name, due_date, %priority, "task added");
        Ok(())
    }

    /// Remove the first task named `name` and push it on the undo stack
    pub fn delete_task(&mut self, name: &str) -> Result<(), TaskError> {
        let record = self.tasks.remove(name)?;
        self.undo.push(record);
        debug!(name, undo_depth = self.undo.len(), "task deleted");
        Ok(())
    }

    /// Put the most recently deleted task back, at the end of the list.
    /// The record is restored as it was deleted, status included.
    pub fn undo_delete(&mut self) -> Result<TaskRecord, TaskError> {
        let record = self.undo.pop()?;
        debug!(name = %record.name, "task restored");
        self.tasks.push_back(record.clone());
        Ok(record)
    }

    pub fn mark_complete(&mut self, name: &str) -> Result<(), TaskError> {
        self.tasks.mark_complete(name)?;
        debug!(name, "task completed");
        Ok(())
    }

    pub fn sort_by_due_date(&mut self) -> Result<(), TaskError> {
        self.tasks.sort_by_due_date()?;
        debug!(count = self.tasks.len(), "tasks sorted by due date");
        Ok(())
    }

    pub fn enqueue_urgent(&mut self, name: &str) {
        self.urgent.enqueue(name);
        debug!(name, queued = self.urgent.len(), "urgent task queued");
    }

    /// Take the oldest urgent name off the queue
    pub fn dequeue_urgent(&mut self) -> Result<String, TaskError> {
        let name = self.urgent.dequeue()?;
        debug!(name = %name, "urgent task dequeued");
        Ok(name)
    }

    /// Tasks whose names contain `text`, ignoring case
    pub fn search(&self, text: &str) -> Vec<&TaskRecord> {
        filter_tasks(&self.tasks, text)
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn urgent(&self) -> &UrgentQueue {
        &self.urgent
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    /// (pending, completed) task counts
    pub fn counts(&self) -> (usize, usize) {
        let done = self.tasks.iter().filter(|r| r.is_completed()).count();
        (self.tasks.len() - done, done)
    }
}
