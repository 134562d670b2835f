//! Undo/redo over whole-value snapshots
//!
//! Edits replace the present value with a new snapshot instead of mutating
//! it, so undo is just stepping back through previously stored values.

use std::collections::VecDeque;

/// Default number of undo steps kept
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

#[derive(Debug, Clone)]
pub struct History<T> {
    past: VecDeque<T>,
    present: T,
    future: Vec<T>,
    limit: usize,
}

impl<T: Clone + PartialEq> History<T> {
    pub fn new(initial: T) -> Self {
        Self::with_limit(initial, DEFAULT_HISTORY_LIMIT)
    }

    /// A history that keeps at most `limit` undo steps (minimum 1)
    pub fn with_limit(initial: T, limit: usize) -> Self {
        Self {
            past: VecDeque::new(),
            present: initial,
            future: Vec::new(),
            limit: limit.max(1),
        }
    }

    pub fn present(&self) -> &T {
        &self.present
    }

    /// Record a new present value. Clears the redo stack.
    ///
    /// Returns false if `next` equals the present value, in which case
    /// nothing is recorded.
    pub fn push(&mut self, next: T) -> bool {
        if next == self.present {
            return false;
        }
        let previous = std::mem::replace(&mut self.present, next);
        self.past.push_back(previous);
        if self.past.len() > self.limit {
            self.past.pop_front();
        }
        self.future.clear();
        true
    }

    /// Apply an edit to a copy of the present value and record the result
    pub fn update(&mut self, edit: impl FnOnce(&mut T)) -> bool {
        let mut next = self.present.clone();
        edit(&mut next);
        self.push(next)
    }

    pub fn undo(&mut self) -> Option<&T> {
        let previous = self.past.pop_back()?;
        let current = std::mem::replace(&mut self.present, previous);
        self.future.push(current);
        Some(&self.present)
    }

    pub fn redo(&mut self) -> Option<&T> {
        let next = self.future.pop()?;
        let current = std::mem::replace(&mut self.present, next);
        self.past.push_back(current);
        Some(&self.present)
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.past.len()
    }

    /// Replace the present value and forget all history, e.g. after loading a file
    pub fn reset(&mut self, value: T) {
        self.present = value;
        self.past.clear();
        self.future.clear();
    }

    pub fn into_present(self) -> T {
        self.present
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undo_redo_round_trip() {
        let mut h = History::new(1);
        h.push(2);
        h.push(3);

        assert_eq!(h.undo(), Some(&2));
        assert_eq!(h.undo(), Some(&1));
        assert_eq!(h.undo(), None);
        assert_eq!(h.redo(), Some(&2));
        assert_eq!(*h.present(), 2);
        assert!(h.can_redo());
    }

    #[test]
    fn test_push_clears_redo() {
        let mut h = History::new("a".to_string());
        h.push("b".into());
        h.undo();
        assert!(h.can_redo());

        h.push("c".into());
        assert!(!h.can_redo());
        assert_eq!(h.undo().map(String::as_str), Some("a"));
    }

    #[test]
    fn test_equal_snapshot_not_recorded() {
        let mut h = History::new(5);
        assert!(!h.push(5));
        assert!(!h.can_undo());
    }

    #[test]
    fn test_limit_drops_oldest() {
        let mut h = History::with_limit(0, 2);
        for v in 1..=4 {
            h.push(v);
        }
        assert_eq!(h.undo_depth(), 2);
        assert_eq!(h.undo(), Some(&3));
        assert_eq!(h.undo(), Some(&2));
        assert_eq!(h.undo(), None);
    }
}
