// Copyright 2025 the Tailor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The inspector store.

use core::fmt;
use core::time::Duration;
use std::cell::OnceCell;
use std::rc::Rc;

use tailor_compile::{ClassList, class_source, compile, generate_markup};
use tailor_state::{Edit, NestedPatch, StylePatch, StyleState};
use tailor_timing::{Clock, Debouncer, SystemClock};

use crate::bridge::{BridgeMessage, ElementSelection};
use crate::config::{InspectorConfig, SelectionPolicy};
use crate::history::History;
use crate::storage::{MemoryStorage, SnapshotStorage};

/// Whether the current snapshot is a fresh baseline or has been edited.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Freshly loaded, reset, or selected without differing from the baseline.
    #[default]
    Default,
    /// Changed by an edit, an undo, or a selection that differs from the
    /// baseline.
    Edited,
}

#[derive(Debug)]
struct Derived {
    classes: ClassList,
    tailwind: String,
    code: String,
}

/// The mutable controller around one element's [`StyleState`].
///
/// The store owns the current snapshot and its undo [`History`]. Every change
/// bumps a revision counter, invalidates the generated class string and markup,
/// and schedules a debounced write of the snapshot to storage. The store has
/// no timer of its own: the host calls [`poll`](Self::poll) from its event
/// loop, and writes fire once the configured delay has passed since the last
/// change.
///
/// ```rust
/// use tailor_inspector::{InspectorConfig, InspectorStore, MemoryStorage};
/// use tailor_state::{NestedPatch, Side, StylePatch};
/// use tailor_timing::ManualClock;
///
/// let clock = ManualClock::new();
/// let storage = MemoryStorage::new();
/// let mut store = InspectorStore::new(InspectorConfig::default(), storage.clone(), clock.clone());
///
/// store.update_nested_state(NestedPatch::padding(Side::Top, "4"));
/// store.update_state(StylePatch::Opacity(50.0));
/// assert!(store.generated_tailwind().starts_with("pt-4 pb-3"));
/// assert!(store.generated_tailwind().ends_with("opacity-[0.50]"));
///
/// store.undo();
/// assert!(!store.generated_tailwind().contains("opacity"));
///
/// clock.advance(store.config().persist_delay());
/// assert!(store.poll());
/// assert!(storage.get("inspector-state").is_some());
/// ```
pub struct InspectorStore<S: SnapshotStorage = MemoryStorage, C: Clock = SystemClock> {
    config: InspectorConfig,
    baseline: Rc<StyleState>,
    state: Rc<StyleState>,
    history: History<Rc<StyleState>>,
    phase: Phase,
    revision: u64,
    derived: OnceCell<Derived>,
    persist: Debouncer<u64>,
    storage: S,
    clock: C,
}

impl<S: SnapshotStorage, C: Clock> InspectorStore<S, C> {
    /// Creates a store, restoring the persisted snapshot if there is one.
    ///
    /// The persisted document is merged over the configured baseline. A
    /// document that cannot be read or parsed is logged and ignored, and fields
    /// with the wrong shape keep their baseline values.
    pub fn new(config: InspectorConfig, storage: S, clock: C) -> Self {
        let baseline = Rc::new(config.baseline.clone().clamped());
        let restored = restore(&storage, &config.storage_key, &baseline);
        let phase = if restored == *baseline {
            Phase::Default
        } else {
            Phase::Edited
        };
        let state = if phase == Phase::Default {
            Rc::clone(&baseline)
        } else {
            Rc::new(restored)
        };

        Self {
            history: History::with_limit(config.history_limit),
            persist: Debouncer::new(config.persist_delay()),
            config,
            baseline,
            state,
            phase,
            revision: 0,
            derived: OnceCell::new(),
            storage,
            clock,
        }
    }

    /// Replaces one top-level field.
    pub fn update_state(&mut self, patch: StylePatch) {
        tracing::trace!(key = patch.key(), "update");
        self.edit(|state| patch.apply_to(state));
    }

    /// Replaces one member of a nested record, keeping its siblings.
    pub fn update_nested_state(&mut self, patch: NestedPatch) {
        tracing::trace!(key = patch.key(), "nested update");
        self.edit(|state| patch.apply_to(state));
    }

    /// Applies either kind of edit.
    pub fn apply(&mut self, edit: Edit) {
        match edit {
            Edit::Field(patch) => self.update_state(patch),
            Edit::Nested(patch) => self.update_nested_state(patch),
        }
    }

    /// Replaces the snapshot with the baseline and deletes the persisted copy.
    ///
    /// The snapshot being replaced is kept in history, so a reset can be
    /// undone.
    pub fn reset_state(&mut self) {
        let previous = core::mem::replace(&mut self.state, Rc::clone(&self.baseline));
        self.history.push(previous);
        self.phase = Phase::Default;
        self.bump();

        if self.persist.cancel() {
            tracing::debug!(revision = self.revision, "reset discarded a pending write");
        }
        if let Err(err) = self.storage.remove(&self.config.storage_key) {
            tracing::error!(
                error = %err,
                key = %self.config.storage_key,
                "failed to remove persisted snapshot"
            );
        }
    }

    /// Restores the most recent snapshot from history.
    ///
    /// Returns `false`, and does nothing, when there is nothing to undo. The
    /// entry is consumed; there is no redo.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.history.pop() else {
            return false;
        };
        self.state = previous;
        self.phase = Phase::Edited;
        self.changed();
        tracing::debug!(
            revision = self.revision,
            remaining = self.history.len(),
            "undo"
        );
        true
    }

    /// Returns `true` if [`undo`](Self::undo) would change the snapshot.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Returns the number of available undo steps.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Adopts an element picked in the preview.
    ///
    /// Depending on [`SelectionPolicy`], the reported fields are written over
    /// the current snapshot or over the baseline. History belongs to the
    /// previous element and is cleared.
    pub fn select_element(&mut self, selection: &ElementSelection) {
        let mut next = match self.config.selection {
            SelectionPolicy::Merge => StyleState::clone(&self.state),
            SelectionPolicy::Reset => StyleState::clone(&self.baseline),
        };
        selection.apply_to(&mut next);

        self.phase = if next == *self.baseline {
            Phase::Default
        } else {
            Phase::Edited
        };
        self.state = Rc::new(next);
        self.history.clear();
        self.changed();
        tracing::debug!(
            id = %self.state.element_id,
            tag = %self.state.element_tag,
            policy = ?self.config.selection,
            "selected element"
        );
    }

    /// Handles a message from the preview.
    ///
    /// Returns `true` if the snapshot changed.
    pub fn handle_message(&mut self, message: &BridgeMessage) -> bool {
        match message {
            BridgeMessage::ElementSelected(selection) => {
                self.select_element(selection);
                true
            }
            BridgeMessage::Ready => {
                tracing::debug!("preview ready");
                false
            }
            BridgeMessage::Error(error) => {
                tracing::warn!(
                    kind = %error.kind,
                    line = ?error.line,
                    column = ?error.column,
                    "preview error: {}",
                    error.message
                );
                false
            }
        }
    }

    /// Returns the current snapshot.
    #[must_use]
    pub fn state(&self) -> &StyleState {
        &self.state
    }

    /// Returns a shared handle to the current snapshot.
    ///
    /// The handle stays valid, and unchanged, across later edits.
    #[must_use]
    pub fn snapshot(&self) -> Rc<StyleState> {
        Rc::clone(&self.state)
    }

    /// Returns the baseline snapshot.
    #[must_use]
    pub fn baseline(&self) -> &StyleState {
        &self.baseline
    }

    /// Returns whether the snapshot has been edited since the last reset or
    /// selection.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the revision, which increases on every change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns the compiled class list.
    #[must_use]
    pub fn class_list(&self) -> &ClassList {
        &self.derived().classes
    }

    /// Returns the compiled class string.
    #[must_use]
    pub fn generated_tailwind(&self) -> &str {
        &self.derived().tailwind
    }

    /// Returns markup for the element, preferring its captured class attribute
    /// over the compiled string.
    #[must_use]
    pub fn generated_code(&self) -> &str {
        &self.derived().code
    }

    /// Writes the snapshot if the debounced write is due.
    ///
    /// Returns `true` if a write was attempted. Storage failures are logged.
    pub fn poll(&mut self) -> bool {
        match self.persist.poll(self.clock.now()) {
            Some(revision) => {
                self.persist_now(revision);
                true
            }
            None => false,
        }
    }

    /// Writes a pending snapshot immediately.
    ///
    /// Returns `true` if a write was pending.
    pub fn flush(&mut self) -> bool {
        match self.persist.flush() {
            Some(revision) => {
                self.persist_now(revision);
                true
            }
            None => false,
        }
    }

    /// Returns when the pending write is due, on the store's clock.
    #[must_use]
    pub fn pending_write(&self) -> Option<Duration> {
        self.persist.deadline()
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &InspectorConfig {
        &self.config
    }

    /// Returns the storage backend.
    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Returns the clock.
    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    fn edit(&mut self, f: impl FnOnce(&mut StyleState)) {
        let mut next = StyleState::clone(&self.state);
        f(&mut next);
        let previous = core::mem::replace(&mut self.state, Rc::new(next));
        self.history.push(previous);
        self.phase = Phase::Edited;
        self.changed();
    }

    /// Records a change to `state` and schedules a write.
    fn changed(&mut self) {
        self.bump();
        self.persist.schedule(self.clock.now(), self.revision);
    }

    fn bump(&mut self) {
        self.revision += 1;
        self.derived.take();
    }

    fn derived(&self) -> &Derived {
        self.derived.get_or_init(|| {
            let classes = compile(&self.state);
            let tailwind = classes.to_string();
            let code = generate_markup(
                &self.state,
                class_source(&self.state, &tailwind),
                &self.config.markup,
            );
            Derived {
                classes,
                tailwind,
                code,
            }
        })
    }

    fn persist_now(&mut self, revision: u64) {
        let key = &self.config.storage_key;
        let result = self
            .state
            .to_json()
            .map_err(|err| err.to_string())
            .and_then(|json| {
                self.storage
                    .write(key, &json)
                    .map_err(|err| err.to_string())
            });
        match result {
            Ok(()) => tracing::debug!(revision, key = %key, "persisted snapshot"),
            Err(err) => {
                tracing::error!(revision, key = %key, error = %err, "failed to persist snapshot");
            }
        }
    }
}

impl<S: SnapshotStorage, C: Clock> fmt::Debug for InspectorStore<S, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InspectorStore")
            .field("revision", &self.revision)
            .field("phase", &self.phase)
            .field("history", &self.history.len())
            .field("pending_write", &self.persist.deadline())
            .finish_non_exhaustive()
    }
}

impl<S: SnapshotStorage, C: Clock> Drop for InspectorStore<S, C> {
    fn drop(&mut self) {
        if self.persist.cancel() {
            tracing::debug!(
                revision = self.revision,
                "store dropped with a pending write"
            );
        }
    }
}

fn restore<S: SnapshotStorage>(storage: &S, key: &str, baseline: &StyleState) -> StyleState {
    let text = match storage.read(key) {
        Ok(Some(text)) => text,
        Ok(None) => return baseline.clone(),
        Err(err) => {
            tracing::error!(error = %err, key, "failed to read persisted snapshot; using baseline");
            return baseline.clone();
        }
    };
    match StyleState::merge_json(baseline, &text) {
        Ok(report) => {
            if !report.is_clean() {
                tracing::warn!(
                    key,
                    rejected = ?report.rejected,
                    "ignored malformed snapshot fields"
                );
            }
            report.state
        }
        Err(err) => {
            tracing::warn!(error = %err, key, "persisted snapshot is unreadable; using baseline");
            baseline.clone()
        }
    }
}
