// Copyright 2025 the Tailor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lenient restoration of persisted snapshots.
//!
//! A persisted snapshot may come from an older session, a different build, or
//! a hand-edited file. Restoration never fails on shape problems: each known
//! top-level key is decoded on its own and merged over a base snapshot, keys
//! with the wrong shape keep the base value, and nested records fill missing
//! members from their defaults. Only text that is not a JSON object at all is
//! reported as an error, so the caller can fall back wholesale.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::StyleState;

/// Why a persisted snapshot could not be read at all.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The text is not JSON.
    #[error("snapshot is not valid JSON: {0}")]
    Json(JsonError),
    /// The document is JSON but not an object.
    #[error("snapshot is not a JSON object")]
    NotAnObject,
}

/// Display wrapper around the JSON parser error.
pub struct JsonError(serde_json::Error);

impl JsonError {
    /// Line of the parse failure, 1-based.
    #[must_use]
    pub fn line(&self) -> usize {
        self.0.line()
    }

    /// Column of the parse failure, 1-based.
    #[must_use]
    pub fn column(&self) -> usize {
        self.0.column()
    }
}

impl fmt::Debug for JsonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for JsonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(JsonError(err))
    }
}

/// The outcome of a lenient merge.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadReport {
    /// The merged snapshot.
    pub state: StyleState,
    /// Keys that were present but had the wrong shape, in key order.
    pub rejected: Vec<&'static str>,
}

impl LoadReport {
    /// Returns `true` if every present key was accepted.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

impl StyleState {
    /// Merges a persisted JSON snapshot over `base`.
    ///
    /// ```rust
    /// use tailor_state::StyleState;
    ///
    /// let base = StyleState::starter();
    /// let report = StyleState::merge_json(&base, r#"{"opacity": 40, "breakpoint": "xxl"}"#).unwrap();
    /// assert_eq!(report.state.opacity, 40.0);
    /// // Unknown breakpoint: the base value survives and the key is reported.
    /// assert_eq!(report.state.breakpoint, base.breakpoint);
    /// assert_eq!(report.rejected, ["breakpoint"]);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] if `text` is not JSON or not a JSON object.
    pub fn merge_json(base: &Self, text: &str) -> Result<LoadReport, LoadError> {
        let Value::Object(map) = serde_json::from_str::<Value>(text)? else {
            return Err(LoadError::NotAnObject);
        };
        Ok(Self::merge_map(base, map))
    }

    /// Serializes the snapshot to its persisted JSON form.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors; none are expected for finite values.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    fn merge_map(base: &Self, map: Map<String, Value>) -> LoadReport {
        let mut state = base.clone();
        let mut rejected = Vec::new();
        let mut merger = Merger {
            rejected: &mut rejected,
        };

        for (key, value) in map {
            match key.as_str() {
                "elementId" => merger.take("elementId", value, &mut state.element_id),
                "elementTag" => merger.take("elementTag", value, &mut state.element_tag),
                "textContent" => merger.take("textContent", value, &mut state.text_content),
                "link" => merger.take("link", value, &mut state.link),
                "tailwindClasses" => {
                    merger.take("tailwindClasses", value, &mut state.tailwind_classes);
                }
                "margin" => merger.take("margin", value, &mut state.margin),
                "padding" => merger.take("padding", value, &mut state.padding),
                "size" => merger.take("size", value, &mut state.size),
                "typography" => merger.take("typography", value, &mut state.typography),
                "background" => merger.take("background", value, &mut state.background),
                "border" => merger.take("border", value, &mut state.border),
                "transforms" => merger.take("transforms", value, &mut state.transforms),
                "transforms3d" => merger.take("transforms3d", value, &mut state.transforms3d),
                "opacity" => merger.take("opacity", value, &mut state.opacity),
                "blur" => merger.take("blur", value, &mut state.blur),
                "backdropBlur" => merger.take("backdropBlur", value, &mut state.backdrop_blur),
                "breakpoint" => merger.take("breakpoint", value, &mut state.breakpoint),
                _ => {}
            }
        }

        rejected.sort_unstable();
        LoadReport {
            state: state.clamped(),
            rejected,
        }
    }
}

struct Merger<'a> {
    rejected: &'a mut Vec<&'static str>,
}

impl Merger<'_> {
    fn take<T: DeserializeOwned>(&mut self, key: &'static str, value: Value, slot: &mut T) {
        match serde_json::from_value(value) {
            Ok(decoded) => *slot = decoded,
            Err(_) => self.rejected.push(key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Breakpoint, Spacing, TextAlign};

    #[test]
    fn empty_object_keeps_base() {
        let base = StyleState::starter();
        let report = StyleState::merge_json(&base, "{}").unwrap();
        assert_eq!(report.state, base);
        assert!(report.is_clean());
    }

    #[test]
    fn invalid_json_is_an_error() {
        let base = StyleState::default();
        assert!(matches!(
            StyleState::merge_json(&base, "{not json"),
            Err(LoadError::Json(_))
        ));
        assert!(matches!(
            StyleState::merge_json(&base, "[1, 2]"),
            Err(LoadError::NotAnObject)
        ));
        assert!(matches!(
            StyleState::merge_json(&base, "null"),
            Err(LoadError::NotAnObject)
        ));
    }

    #[test]
    fn nested_records_fill_missing_members() {
        let base = StyleState::starter();
        let report = StyleState::merge_json(
            &base,
            r#"{"padding": {"top": "6"}, "transforms": {"rotate": 15}}"#,
        )
        .unwrap();
        // Shallow at the top level: the whole padding record is replaced and
        // its missing sides come from the record default, not from `base`.
        assert_eq!(report.state.padding, Spacing::new("6", "", "", ""));
        assert_eq!(report.state.transforms.rotate, 15.0);
        assert_eq!(report.state.transforms.scale, 100.0);
        assert!(report.is_clean());
    }

    #[test]
    fn wrong_shapes_are_rejected_individually() {
        let base = StyleState::starter();
        let report = StyleState::merge_json(
            &base,
            r#"{"opacity": "half", "margin": 4, "textContent": "Hello", "transforms3d": {"rotateX": "a"}}"#,
        )
        .unwrap();
        assert_eq!(report.state.opacity, base.opacity);
        assert_eq!(report.state.margin, base.margin);
        assert_eq!(report.state.transforms3d, base.transforms3d);
        assert_eq!(report.state.text_content, "Hello");
        assert_eq!(report.rejected, ["margin", "opacity", "transforms3d"]);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let base = StyleState::default();
        let report = StyleState::merge_json(&base, r#"{"theme": "dark", "link": "/a"}"#).unwrap();
        assert_eq!(report.state.link, "/a");
        assert!(report.is_clean());
    }

    #[test]
    fn effects_are_clamped() {
        let base = StyleState::default();
        let report =
            StyleState::merge_json(&base, r#"{"opacity": 250, "blur": 99, "backdropBlur": -1}"#)
                .unwrap();
        assert_eq!(report.state.opacity, 100.0);
        assert_eq!(report.state.blur, Some(50.0));
        assert_eq!(report.state.backdrop_blur, Some(0.0));
    }

    #[test]
    fn persisted_form_round_trips() {
        let mut state = StyleState::starter();
        state.breakpoint = Breakpoint::Xxl;
        state.typography.text_align = Some(TextAlign::Right);
        let text = state.to_json().unwrap();
        let report = StyleState::merge_json(&StyleState::default(), &text).unwrap();
        assert_eq!(report.state, state);
    }
}
