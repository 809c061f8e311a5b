// Copyright 2025 the Tailor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounded undo history.

use std::collections::VecDeque;

/// Default number of snapshots kept for undo.
pub const HISTORY_LIMIT: usize = 20;

/// A bounded stack of earlier values.
///
/// Pushing beyond the limit drops the oldest entry. Popping hands back the most
/// recent entry and forgets it; there is no redo side.
///
/// ```rust
/// use tailor_inspector::History;
///
/// let mut history = History::with_limit(2);
/// history.push("a");
/// history.push("b");
/// history.push("c"); // "a" falls off
/// assert_eq!(history.pop(), Some("c"));
/// assert_eq!(history.pop(), Some("b"));
/// assert_eq!(history.pop(), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct History<T> {
    entries: VecDeque<T>,
    limit: usize,
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self::with_limit(HISTORY_LIMIT)
    }
}

impl<T> History<T> {
    /// Creates an empty history holding at most `limit` entries.
    ///
    /// A limit of zero keeps nothing, which disables undo.
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(limit.min(HISTORY_LIMIT)),
            limit,
        }
    }

    /// Returns the maximum number of entries.
    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Records `value` as the most recent entry.
    ///
    /// Returns the entry that was dropped to make room, if any.
    pub fn push(&mut self, value: T) -> Option<T> {
        if self.limit == 0 {
            return Some(value);
        }
        let dropped = if self.entries.len() >= self.limit {
            self.entries.pop_front()
        } else {
            None
        };
        self.entries.push_back(value);
        dropped
    }

    /// Removes and returns the most recent entry.
    pub fn pop(&mut self) -> Option<T> {
        self.entries.pop_back()
    }

    /// Returns the most recent entry.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.entries.back()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there is nothing to undo.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forgets every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates from the oldest entry to the most recent.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator + '_ {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cap_drops_oldest() {
        let mut history = History::default();
        for i in 0..25_u32 {
            let dropped = history.push(i);
            assert_eq!(dropped, i.checked_sub(20));
        }
        assert_eq!(history.len(), 20);
        assert_eq!(history.iter().next(), Some(&5));
        assert_eq!(history.peek(), Some(&24));
    }

    #[test]
    fn zero_limit_keeps_nothing() {
        let mut history = History::with_limit(0);
        assert_eq!(history.push('x'), Some('x'));
        assert!(history.is_empty());
        assert_eq!(history.pop(), None);
    }

    #[test]
    fn clear_forgets_everything() {
        let mut history = History::with_limit(3);
        history.push(1);
        history.push(2);
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.limit(), 3);
    }
}
