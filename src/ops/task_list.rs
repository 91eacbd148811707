use chrono::NaiveDateTime;

use crate::model::task::{Priority, TaskRecord, TaskStatus};
use crate::ops::error::TaskError;

/// A slot in the arena: a record plus its neighbor links
#[derive(Debug, Clone)]
struct Node {
    record: TaskRecord,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Ordered task collection: a doubly linked list whose nodes live in an
/// arena and link to each other by index.
///
/// Records are located by linear scan on `name`; with duplicate names the
/// first match from the head wins.
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    nodes: Vec<Option<Node>>,
    /// Vacated arena slots, reused by later appends
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Build a pending task and append it as the new tail
    pub fn add(&mut self, name: impl Into<String>, due_date: impl Into<String>, priority: Priority) {
        self.push_back(TaskRecord::new(name, due_date, priority));
    }

    /// Append an existing record unchanged as the new tail
    pub fn push_back(&mut self, record: TaskRecord) {
        let node = Node {
            record,
            prev: self.tail,
            next: None,
        };
        let idx = match self.free.pop() {
            Some(idx) => {
                self.nodes[idx] = Some(node);
                idx
            }
            None => {
                self.nodes.push(Some(node));
                self.nodes.len() - 1
            }
        };

        match self.tail.and_then(|t| self.nodes[t].as_mut()) {
            Some(old_tail) => old_tail.next = Some(idx),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        self.len += 1;
    }

    /// Unlink the first task named `name` and hand it back
    pub fn remove(&mut self, name: &str) -> Result<TaskRecord, TaskError> {
        let idx = self
            .position(name)
            .ok_or_else(|| TaskError::NotFound(name.to_string()))?;
        let node = self.nodes[idx]
            .take()
            .ok_or_else(|| TaskError::NotFound(name.to_string()))?;

        match node.prev {
            Some(p) => {
                if let Some(prev) = self.nodes[p].as_mut() {
                    prev.next = node.next;
                }
            }
            None => self.head = node.next,
        }
        match node.next {
            Some(n) => {
                if let Some(next) = self.nodes[n].as_mut() {
                    next.prev = node.prev;
                }
            }
            None => self.tail = node.prev,
        }

        self.free.push(idx);
        self.len -= 1;
        if self.len == 0 {
            // Nothing left to reuse slots for; drop the arena entirely
            self.nodes.clear();
            self.free.clear();
        }
        Ok(node.record)
    }

    /// Set the first task named `name` to Completed
    pub fn mark_complete(&mut self, name: &str) -> Result<(), TaskError> {
        let record = self
            .position(name)
            .and_then(|idx| self.nodes[idx].as_mut())
            .map(|node| &mut node.record)
            .ok_or_else(|| TaskError::NotFound(name.to_string()))?;
        record.status = TaskStatus::Completed;
        Ok(())
    }

    /// First task named `name`
    pub fn find(&self, name: &str) -> Option<&TaskRecord> {
        self.iter().find(|record| record.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// The tail record
    pub fn last(&self) -> Option<&TaskRecord> {
        self.tail
            .and_then(|t| self.nodes[t].as_ref())
            .map(|node| &node.record)
    }

    /// Records in list order, head first
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            cursor: self.head,
            remaining: self.len,
        }
    }

    /// Snapshot of every record in list order
    pub fn list_all(&self) -> Vec<TaskRecord> {
        self.iter().cloned().collect()
    }

    /// Rebuild the list in ascending due-date order.
    ///
    /// Every date is parsed before anything moves, so a malformed date leaves
    /// the list exactly as it was. Equal dates keep their relative order.
    /// Records move whole, so a Completed task stays Completed.
    pub fn sort_by_due_date(&mut self) -> Result<(), TaskError> {
        let keys = self
            .iter()
            .map(TaskRecord::due)
            .collect::<Result<Vec<NaiveDateTime>, _>>()?;

        let records = std::mem::take(self).into_records();
        let mut keyed: Vec<(NaiveDateTime, TaskRecord)> = keys.into_iter().zip(records).collect();
        keyed.sort_by_key(|(due, _)| *due);

        for (_, record) in keyed {
            self.push_back(record);
        }
        Ok(())
    }

    /// Consume the list, yielding its records head first
    pub fn into_records(mut self) -> Vec<TaskRecord> {
        let mut records = Vec::with_capacity(self.len);
        let mut cursor = self.head;
        while let Some(node) = cursor.and_then(|idx| self.nodes[idx].take()) {
            cursor = node.next;
            records.push(node.record);
        }
        records
    }

    /// Arena index of the first node named `name`
    fn position(&self, name: &str) -> Option<usize> {
        let mut cursor = self.head;
        while let Some(idx) = cursor {
            let node = self.nodes[idx].as_ref()?;
            if node.record.name == name {
                return Some(idx);
            }
            cursor = node.next;
        }
        None
    }
}

/// Head-to-tail iterator over a [`TaskList`]
pub struct Iter<'a> {
    list: &'a TaskList,
    cursor: Option<usize>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a TaskRecord;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.nodes[self.cursor?].as_ref()?;
        self.cursor = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a TaskRecord;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<TaskRecord> for TaskList {
    fn from_iter<I: IntoIterator<Item = TaskRecord>>(iter: I) -> Self {
        let mut list = TaskList::new();
        for record in iter {
            list.push_back(record);
        }
        list
    }
}
