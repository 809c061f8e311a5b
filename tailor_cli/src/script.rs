// Copyright 2025 the Tailor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Session scripts.
//!
//! A script is JSON Lines: one step per line, tagged by `op`. Blank lines and
//! lines starting with `#` are skipped.
//!
//! ```text
//! {"op": "update", "key": "opacity", "value": 50}
//! {"op": "nested", "key": "padding", "nestedKey": "top", "value": "4"}
//! {"op": "wait", "ms": 300}
//! {"op": "undo"}
//! {"op": "reset"}
//! {"op": "message", "type": "ELEMENT_SELECTED", "elementTag": "p"}
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use tailor_inspector::BridgeMessage;
use tailor_state::{NestedPatch, StylePatch};

/// One step of a session.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Step {
    /// Replace a top-level field.
    Update(StylePatch),
    /// Replace one member of a nested record.
    Nested(NestedPatch),
    /// Reset to the baseline.
    Reset,
    /// Undo the last change.
    Undo,
    /// Deliver a preview message.
    Message(BridgeMessage),
    /// Let time pass, firing any write that becomes due.
    Wait {
        /// Milliseconds to advance.
        ms: u64,
    },
}

impl Step {
    /// Returns the step's `op` name.
    #[must_use]
    pub fn op(&self) -> &'static str {
        match self {
            Self::Update(_) => "update",
            Self::Nested(_) => "nested",
            Self::Reset => "reset",
            Self::Undo => "undo",
            Self::Message(_) => "message",
            Self::Wait { .. } => "wait",
        }
    }
}

/// Parses a script.
///
/// # Errors
///
/// Fails on the first line that is not a valid step, naming its line number.
pub fn parse_script(text: &str) -> Result<Vec<Step>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(i, line)| {
            serde_json::from_str(line).with_context(|| format!("invalid step on line {}", i + 1))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tailor_state::Side;

    #[test]
    fn parses_every_op() {
        let steps = parse_script(
            r#"
# comment
{"op": "update", "key": "opacity", "value": 50}
{"op": "nested", "key": "padding", "nestedKey": "top", "value": "4"}

{"op": "wait", "ms": 300}
{"op": "undo"}
{"op": "reset"}
{"op": "message", "type": "READY"}
"#,
        )
        .unwrap();
        assert_eq!(
            steps,
            [
                Step::Update(StylePatch::Opacity(50.0)),
                Step::Nested(NestedPatch::padding(Side::Top, "4")),
                Step::Wait { ms: 300 },
                Step::Undo,
                Step::Reset,
                Step::Message(BridgeMessage::Ready),
            ]
        );
    }

    #[test]
    fn errors_name_the_line() {
        let err = parse_script("{\"op\": \"undo\"}\n{\"op\": \"explode\"}").unwrap_err();
        assert_eq!(err.to_string(), "invalid step on line 2");
    }
}
