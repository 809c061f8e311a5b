// Copyright 2025 the Tailor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Debounced text input for editable fields.

use core::fmt;
use core::time::Duration;

use tailor_state::Edit;
use tailor_timing::{Clock, Debouncer};

use crate::config::InspectorConfig;
use crate::storage::SnapshotStorage;
use crate::store::InspectorStore;

/// One editable field whose keystrokes are coalesced before they reach the
/// store.
///
/// Each keystroke replaces the pending edit and restarts the delay, so a burst
/// of typing lands in the store, and in its history, as a single edit.
/// Dropping the input discards an uncommitted edit.
///
/// ```rust
/// use core::time::Duration;
/// use tailor_inspector::{FieldInput, InspectorConfig, InspectorStore, MemoryStorage};
/// use tailor_state::{NestedPatch, Side};
/// use tailor_timing::ManualClock;
///
/// let clock = ManualClock::new();
/// let mut store = InspectorStore::new(InspectorConfig::default(), MemoryStorage::new(), clock.clone());
/// let mut field = FieldInput::new(Duration::from_millis(100), clock.clone());
///
/// for text in ["1", "12", "12"] {
///     field.input(NestedPatch::padding(Side::Left, text));
///     clock.advance(Duration::from_millis(40));
/// }
/// assert!(!field.commit_due(&mut store));
///
/// clock.advance(Duration::from_millis(60));
/// assert!(field.commit_due(&mut store));
/// assert_eq!(store.state().padding.left, "12");
/// assert_eq!(store.history_len(), 1);
/// ```
pub struct FieldInput<C: Clock> {
    pending: Debouncer<Edit>,
    clock: C,
}

impl<C: Clock> FieldInput<C> {
    /// Creates an input that commits `delay` after the last keystroke.
    pub fn new(delay: Duration, clock: C) -> Self {
        Self {
            pending: Debouncer::new(delay),
            clock,
        }
    }

    /// Creates an input using the configured input delay.
    pub fn from_config(config: &InspectorConfig, clock: C) -> Self {
        Self::new(config.input_delay(), clock)
    }

    /// Records a keystroke, replacing any uncommitted edit.
    pub fn input(&mut self, edit: impl Into<Edit>) {
        self.pending.schedule(self.clock.now(), edit.into());
    }

    /// Commits the pending edit into `store` if the delay has passed.
    ///
    /// Returns `true` if an edit was committed.
    pub fn commit_due<S: SnapshotStorage, K: Clock>(
        &mut self,
        store: &mut InspectorStore<S, K>,
    ) -> bool {
        match self.pending.poll(self.clock.now()) {
            Some(edit) => {
                store.apply(edit);
                true
            }
            None => false,
        }
    }

    /// Commits the pending edit now, as when the field loses focus.
    pub fn commit_now<S: SnapshotStorage, K: Clock>(
        &mut self,
        store: &mut InspectorStore<S, K>,
    ) -> bool {
        match self.pending.flush() {
            Some(edit) => {
                store.apply(edit);
                true
            }
            None => false,
        }
    }

    /// Discards the uncommitted edit.
    pub fn cancel(&mut self) -> bool {
        self.pending.cancel()
    }

    /// Returns the uncommitted edit.
    #[must_use]
    pub fn pending_value(&self) -> Option<&Edit> {
        self.pending.peek()
    }
}

impl<C: Clock> fmt::Debug for FieldInput<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldInput")
            .field("pending", &self.pending.peek())
            .field("deadline", &self.pending.deadline())
            .finish_non_exhaustive()
    }
}
