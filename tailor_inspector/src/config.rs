// Copyright 2025 the Tailor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Store configuration.

use core::time::Duration;

use serde::{Deserialize, Serialize};
use tailor_compile::MarkupOptions;
use tailor_state::StyleState;
use tailor_timing::{INPUT_DELAY, PERSIST_DELAY};

use crate::history::HISTORY_LIMIT;

/// Storage key the snapshot is persisted under by default.
pub const STORAGE_KEY: &str = "inspector-state";

/// How a newly selected element's reported styles combine with the current
/// snapshot.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SelectionPolicy {
    /// Overwrite only the fields the preview reports; everything else carries
    /// over from the previous element.
    #[default]
    Merge,
    /// Start from the baseline snapshot, then apply the reported fields.
    Reset,
}

/// Configuration for an [`InspectorStore`](crate::InspectorStore).
///
/// Every field has a default, so a partial JSON document is a valid
/// configuration:
///
/// ```rust
/// use tailor_inspector::{InspectorConfig, SelectionPolicy};
///
/// let config: InspectorConfig =
///     serde_json::from_str(r#"{"historyLimit": 5, "selection": "reset"}"#).unwrap();
/// assert_eq!(config.history_limit, 5);
/// assert_eq!(config.selection, SelectionPolicy::Reset);
/// assert_eq!(config.persist_delay_ms, 300);
/// assert_eq!(config.storage_key, "inspector-state");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InspectorConfig {
    /// Maximum number of undo steps.
    pub history_limit: usize,
    /// Delay between the last change and the snapshot write, in milliseconds.
    pub persist_delay_ms: u64,
    /// Delay between the last keystroke and the committed edit, in milliseconds.
    pub input_delay_ms: u64,
    /// Key the snapshot is persisted under.
    pub storage_key: String,
    /// How element selections combine with the current snapshot.
    pub selection: SelectionPolicy,
    /// Options for generated markup.
    pub markup: MarkupOptions,
    /// Snapshot used when nothing is persisted and by reset.
    pub baseline: StyleState,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            history_limit: HISTORY_LIMIT,
            persist_delay_ms: millis(PERSIST_DELAY),
            input_delay_ms: millis(INPUT_DELAY),
            storage_key: String::from(STORAGE_KEY),
            selection: SelectionPolicy::default(),
            markup: MarkupOptions::default(),
            baseline: StyleState::starter(),
        }
    }
}

impl InspectorConfig {
    /// Returns the persistence delay.
    #[must_use]
    pub fn persist_delay(&self) -> Duration {
        Duration::from_millis(self.persist_delay_ms)
    }

    /// Returns the text-input delay.
    #[must_use]
    pub fn input_delay(&self) -> Duration {
        Duration::from_millis(self.input_delay_ms)
    }

    /// Sets the maximum number of undo steps.
    #[must_use]
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Sets the persistence delay.
    #[must_use]
    pub fn with_persist_delay(mut self, delay: Duration) -> Self {
        self.persist_delay_ms = millis(delay);
        self
    }

    /// Sets the text-input delay.
    #[must_use]
    pub fn with_input_delay(mut self, delay: Duration) -> Self {
        self.input_delay_ms = millis(delay);
        self
    }

    /// Sets the storage key.
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Sets the selection policy.
    #[must_use]
    pub fn with_selection(mut self, policy: SelectionPolicy) -> Self {
        self.selection = policy;
        self
    }

    /// Sets the markup options.
    #[must_use]
    pub fn with_markup(mut self, markup: MarkupOptions) -> Self {
        self.markup = markup;
        self
    }

    /// Sets the baseline snapshot.
    #[must_use]
    pub fn with_baseline(mut self, baseline: StyleState) -> Self {
        self.baseline = baseline;
        self
    }
}

fn millis(delay: Duration) -> u64 {
    u64::try_from(delay.as_millis()).unwrap_or(u64::MAX)
}
