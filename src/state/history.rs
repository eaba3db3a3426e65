use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::distribution::constants::DEFAULT_HISTORY_CAPACITY;

/// Undo/redo stacks of full value snapshots.
///
/// Recording a new snapshot clears the redo stack. The oldest undo snapshot is
/// dropped once `capacity` is reached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct History<T> {
    undo: VecDeque<T>,
    redo: Vec<T>,
    #[serde(default = "default_capacity")]
    capacity: usize,
}

fn default_capacity() -> usize {
    DEFAULT_HISTORY_CAPACITY
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl<T> History<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            undo: VecDeque::new(),
            redo: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    /// Push the state as it was before an edit.
    pub fn record(&mut self, snapshot: T) {
        if self.undo.len() == self.capacity {
            self.undo.pop_front();
        }
        self.undo.push_back(snapshot);
        self.redo.clear();
    }

    /// Step back: hand in the current state, get the previous one.
    pub fn undo(&mut self, current: T) -> Option<T> {
        let previous = self.undo.pop_back()?;
        self.redo.push(current);
        Some(previous)
    }

    /// Step forward again after an undo.
    pub fn redo(&mut self, current: T) -> Option<T> {
        let next = self.redo.pop()?;
        self.undo.push_back(current);
        Some(next)
    }

    /// Take back the latest snapshot without making the current state redoable.
    pub fn discard_latest(&mut self) -> Option<T> {
        self.undo.pop_back()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undo_redo_cycle() {
        let mut history = History::new(10);
        history.record(1);
        history.record(2);

        assert_eq!(history.undo(3), Some(2));
        assert_eq!(history.undo(2), Some(1));
        assert_eq!(history.undo(1), None);

        assert_eq!(history.redo(1), Some(2));
        assert_eq!(history.redo(2), Some(3));
        assert_eq!(history.redo(3), None);
    }

    #[test]
    fn test_record_clears_redo() {
        let mut history = History::new(10);
        history.record("a");
        assert_eq!(history.undo("b"), Some("a"));
        assert!(history.can_redo());

        history.record("a");
        assert!(!history.can_redo());
    }

    #[test]
    fn test_discard_latest_skips_redo() {
        let mut history = History::new(10);
        history.record(1);
        history.record(2);

        assert_eq!(history.discard_latest(), Some(2));
        assert!(!history.can_redo());
        assert_eq!(history.undo(5), Some(1));
        assert_eq!(history.redo(1), Some(5));
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut history = History::new(2);
        history.record(1);
        history.record(2);
        history.record(3);

        assert_eq!(history.undo_len(), 2);
        assert_eq!(history.undo(4), Some(3));
        assert_eq!(history.undo(3), Some(2));
        assert_eq!(history.undo(2), None);
    }
}
