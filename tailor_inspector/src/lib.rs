// Copyright 2025 the Tailor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tailor_inspector --heading-base-level=0

//! Tailor Inspector: the undoable style store behind a visual inspector.
//!
//! [`InspectorStore`] owns the [`StyleState`](tailor_state::StyleState) of the
//! element being inspected. It applies typed edits, keeps a bounded undo
//! [`History`], recomputes the generated class string and markup lazily, and
//! persists the snapshot through a [`SnapshotStorage`] backend after a
//! debounce delay.
//!
//! The surrounding pieces are:
//!
//! - [`InspectorConfig`]: history limit, delays, storage key, selection
//!   policy, markup options and the baseline snapshot. Deserializable from
//!   partial JSON.
//! - [`MemoryStorage`] and [`FileStorage`]: in-memory and directory-backed
//!   storage.
//! - [`BridgeMessage`]: the messages a preview frame posts, including the
//!   [`ElementSelection`] that retargets the store.
//! - [`FieldInput`]: coalesces keystrokes into a single committed edit.
//!
//! ## Driving the store
//!
//! Nothing runs in the background. A host feeds edits and preview messages in
//! and calls [`InspectorStore::poll`] from its event loop; debounced writes
//! fire from there. Dropping the store discards a write that has not fired.
//!
//! ```rust
//! use tailor_inspector::{BridgeMessage, InspectorConfig, InspectorStore, MemoryStorage, Phase};
//! use tailor_state::StylePatch;
//! use tailor_timing::ManualClock;
//!
//! let clock = ManualClock::new();
//! let mut store = InspectorStore::new(InspectorConfig::default(), MemoryStorage::new(), clock.clone());
//! assert_eq!(store.phase(), Phase::Default);
//!
//! store.update_state(StylePatch::Opacity(50.0));
//! assert_eq!(store.phase(), Phase::Edited);
//! assert!(store.can_undo());
//!
//! let message: BridgeMessage = serde_json::from_str(
//!     r#"{"type": "ELEMENT_SELECTED", "elementId": "cta", "elementTag": "button"}"#,
//! )
//! .unwrap();
//! assert!(store.handle_message(&message));
//! assert_eq!(store.state().element_tag, "button");
//! // History belongs to the previously selected element.
//! assert!(!store.can_undo());
//! ```

mod bridge;
mod config;
mod history;
mod input;
mod storage;
mod store;

pub use bridge::{
    BridgeMessage, ComputedSides, ComputedTypography, CssValue, ElementSelection, PreviewError,
};
pub use config::{InspectorConfig, STORAGE_KEY, SelectionPolicy};
pub use history::{HISTORY_LIMIT, History};
pub use input::FieldInput;
pub use storage::{FileStorage, MemoryStorage, SnapshotStorage, StorageError};
pub use store::{InspectorStore, Phase};
