//! Linear undo/redo history over immutable snapshots.
//!
//! ```text
//!   past (oldest → newest)      present      future (nearest → farthest)
//!   [s0, s1, s2]           →    s3      ←    [s4, s5]
//! ```
//!
//! Committing a new snapshot pushes `present` onto `past` and drops the whole
//! `future`. Undo and redo move exactly one snapshot across `present` and are
//! no-ops at the boundaries.

use std::collections::VecDeque;

/// History tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HistoryConfig {
    /// Maximum number of undo steps kept. `None` keeps everything.
    pub max_depth: Option<usize>,
}

impl HistoryConfig {
    pub fn unbounded() -> Self {
        Self { max_depth: None }
    }

    pub fn bounded(max_depth: usize) -> Self {
        Self {
            max_depth: Some(max_depth),
        }
    }
}

/// An undo/redo container.
///
/// The only mutable cell is `present`; snapshots in `past` and `future` are
/// never modified once stored.
#[derive(Debug, Clone)]
pub struct History<S> {
    past: VecDeque<S>,
    present: S,
    future: VecDeque<S>,
    config: HistoryConfig,
}

impl<S: Clone + PartialEq> History<S> {
    /// Creates an unbounded history starting at `initial`.
    pub fn new(initial: S) -> Self {
        Self::with_config(initial, HistoryConfig::default())
    }

    pub fn with_config(initial: S, config: HistoryConfig) -> Self {
        Self {
            past: VecDeque::new(),
            present: initial,
            future: VecDeque::new(),
            config,
        }
    }

    /// The current snapshot.
    pub fn present(&self) -> &S {
        &self.present
    }

    /// Undo candidates, oldest first.
    pub fn past(&self) -> &VecDeque<S> {
        &self.past
    }

    /// Redo candidates, nearest first.
    pub fn future(&self) -> &VecDeque<S> {
        &self.future
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn config(&self) -> HistoryConfig {
        self.config
    }

    /// Makes `next` the present snapshot. Returns true if it changed.
    ///
    /// A snapshot equal to `present` leaves the history untouched.
    pub fn commit(&mut self, next: S) -> bool {
        if next == self.present {
            return false;
        }

        let previous = std::mem::replace(&mut self.present, next);
        self.past.push_back(previous);
        self.future.clear();
        self.enforce_depth();
        true
    }

    /// Steps back one snapshot. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.past.pop_back() else {
            return false;
        };
        let current = std::mem::replace(&mut self.present, previous);
        self.future.push_front(current);
        true
    }

    /// Steps forward one snapshot. Returns false when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.future.pop_front() else {
            return false;
        };
        let current = std::mem::replace(&mut self.present, next);
        self.past.push_back(current);
        true
    }

    /// Drops all history and starts over at `present`.
    pub fn reset(&mut self, present: S) {
        self.past.clear();
        self.future.clear();
        self.present = present;
    }

    fn enforce_depth(&mut self) {
        if let Some(max) = self.config.max_depth {
            while self.past.len() > max {
                self.past.pop_front();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_pushes_and_clears_future() {
        let mut h = History::new(0);
        assert!(h.commit(1));
        assert!(h.commit(2));
        assert_eq!(h.past(), &VecDeque::from([0, 1]));
        assert_eq!(*h.present(), 2);

        assert!(h.undo());
        assert_eq!(h.future(), &VecDeque::from([2]));

        assert!(h.commit(5));
        assert!(h.future().is_empty());
        assert!(!h.redo());
        assert_eq!(*h.present(), 5);
    }

    #[test]
    fn equal_commit_is_noop() {
        let mut h = History::new("a");
        h.commit("b");
        h.undo();
        let before = h.clone();

        assert!(!h.commit("a"));
        assert_eq!(h.past(), before.past());
        assert_eq!(h.future(), before.future());
    }

    #[test]
    fn boundaries_are_noops() {
        let mut h = History::new(7);
        assert!(!h.undo());
        assert!(!h.redo());
        assert_eq!(*h.present(), 7);
        assert!(!h.can_undo());
        assert!(!h.can_redo());
    }

    #[test]
    fn undo_redo_roundtrip() {
        let mut h = History::new(0);
        for i in 1..=4 {
            h.commit(i);
        }
        h.undo();
        h.undo();
        let snapshot = (h.past().clone(), *h.present(), h.future().clone());

        h.undo();
        h.redo();
        assert_eq!((h.past().clone(), *h.present(), h.future().clone()), snapshot);
    }

    #[test]
    fn future_is_nearest_first() {
        let mut h = History::new(0);
        h.commit(1);
        h.commit(2);
        h.commit(3);
        h.undo();
        h.undo();
        assert_eq!(h.future(), &VecDeque::from([2, 3]));
        h.redo();
        assert_eq!(*h.present(), 2);
    }

    #[test]
    fn bounded_history_drops_oldest() {
        let mut h = History::with_config(0, HistoryConfig::bounded(2));
        for i in 1..=5 {
            h.commit(i);
        }
        assert_eq!(h.past(), &VecDeque::from([3, 4]));
        assert!(h.undo());
        assert!(h.undo());
        assert!(!h.undo());
        assert_eq!(*h.present(), 3);
    }

    #[test]
    fn reset_clears_everything() {
        let mut h = History::new(0);
        h.commit(1);
        h.commit(2);
        h.undo();
        h.reset(9);
        assert!(h.past().is_empty());
        assert!(h.future().is_empty());
        assert_eq!(*h.present(), 9);
    }
}
