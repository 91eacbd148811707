use std::collections::VecDeque;

use crate::ops::error::{Buffer, TaskError};

/// First-in/first-out buffer of task names flagged urgent.
///
/// Names are not checked against the task list and may repeat.
#[derive(Debug, Clone, Default)]
pub struct UrgentQueue {
    names: VecDeque<String>,
}

impl UrgentQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, name: impl Into<String>) {
        self.names.push_back(name.into());
    }

    /// Remove and return the oldest name
    pub fn dequeue(&mut self) -> Result<String, TaskError> {
        self.names
            .pop_front()
            .ok_or(TaskError::Empty(Buffer::UrgentQueue))
    }

    /// Queued names, head first
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dequeues_in_arrival_order() {
        let mut queue = UrgentQueue::new();
        queue.enqueue("Pay rent");
        queue.enqueue("Call mom");
        assert_eq!(queue.iter().collect::<Vec<_>>(), vec!["Pay rent", "Call mom"]);
        assert_eq!(queue.dequeue().unwrap(), "Pay rent");
        assert_eq!(queue.dequeue().unwrap(), "Call mom");
    }

    #[test]
    fn dequeue_on_empty_reports_empty_and_stays_empty() {
        let mut queue = UrgentQueue::new();
        queue.enqueue("Pay rent");
        assert_eq!(queue.dequeue().unwrap(), "Pay rent");
        assert!(matches!(queue.dequeue(), Err(TaskError::Empty(Buffer::UrgentQueue))));
        assert!(queue.is_empty());
    }

    #[test]
    fn duplicates_are_kept() {
        let mut queue = UrgentQueue::new();
        queue.enqueue("same");
        queue.enqueue("same");
        assert_eq!(queue.len(), 2);
    }
}
