// Copyright 2025 the Tailor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Messages from the preview frame.
//!
//! The preview posts JSON messages discriminated by a `type` field. Only
//! `ELEMENT_SELECTED` touches the snapshot; `READY` and `ERROR` belong to the
//! preview host and are passed through.

use serde::{Deserialize, Serialize};
use tailor_state::{Spacing, StyleState, TextAlign, Typography};

/// A message posted by the preview frame.
///
/// ```rust
/// use tailor_inspector::BridgeMessage;
///
/// let msg: BridgeMessage = serde_json::from_str(
///     r#"{"type": "ELEMENT_SELECTED", "elementTag": "p", "padding": {"top": 8}}"#,
/// )
/// .unwrap();
/// let BridgeMessage::ElementSelected(selection) = msg else { unreachable!() };
/// assert_eq!(selection.element_tag.as_deref(), Some("p"));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BridgeMessage {
    /// The user picked an element in the preview.
    ElementSelected(ElementSelection),
    /// The preview finished loading.
    Ready,
    /// The preview reported a script error.
    Error(PreviewError),
}

/// An element picked in the preview, with a subset of its computed style.
///
/// Every field is optional. Absent fields leave the snapshot unchanged.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ElementSelection {
    /// The element's id.
    pub element_id: Option<String>,
    /// Lowercase tag name.
    pub element_tag: Option<String>,
    /// Rendered text, truncated by the sender.
    pub text_content: Option<String>,
    /// The raw `class` attribute.
    pub tailwind_classes: Option<String>,
    /// Computed padding in pixels.
    pub padding: Option<ComputedSides>,
    /// Computed margin in pixels.
    pub margin: Option<ComputedSides>,
    /// Computed typography.
    pub typography: Option<ComputedTypography>,
}

/// Computed pixel values for the four sides of a box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComputedSides {
    /// Top edge.
    pub top: f64,
    /// Right edge.
    pub right: f64,
    /// Bottom edge.
    pub bottom: f64,
    /// Left edge.
    pub left: f64,
}

/// Computed typography values.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ComputedTypography {
    /// Font size in pixels.
    pub font_size: Option<f64>,
    /// CSS `font-weight`, numeric (`600`) or keyword (`bold`).
    pub font_weight: Option<CssValue>,
    /// CSS `text-align` keyword.
    pub text_align: Option<String>,
    /// CSS `line-height`, taken verbatim.
    pub line_height: Option<CssValue>,
}

/// A computed CSS value that may arrive as a number or a string.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CssValue {
    /// A bare number.
    Number(f64),
    /// Any other serialized value.
    Text(String),
}

/// A script error reported by the preview.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PreviewError {
    /// Error class, such as `TypeError`.
    #[serde(rename = "errorType")]
    pub kind: String,
    /// Error message.
    pub message: String,
    /// Stack trace, when available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    /// 1-based source line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    /// 1-based source column.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<u32>,
}

impl ElementSelection {
    /// Writes the reported fields into `state`.
    ///
    /// Pixel values become spacing and font-size strings (`16`, `12.5`); CSS
    /// font weights become utility names; unrecognized weights and alignment
    /// keywords leave the field as it was.
    pub fn apply_to(&self, state: &mut StyleState) {
        if let Some(id) = &self.element_id {
            state.element_id.clone_from(id);
        }
        if let Some(tag) = &self.element_tag {
            state.element_tag = tag.to_ascii_lowercase();
        }
        if let Some(text) = &self.text_content {
            state.text_content.clone_from(text);
        }
        if let Some(classes) = &self.tailwind_classes {
            state.tailwind_classes.clone_from(classes);
        }
        if let Some(padding) = &self.padding {
            padding.apply_to(&mut state.padding);
        }
        if let Some(margin) = &self.margin {
            margin.apply_to(&mut state.margin);
        }
        if let Some(typography) = &self.typography {
            typography.apply_to(&mut state.typography);
        }
    }
}

impl ComputedSides {
    fn apply_to(&self, spacing: &mut Spacing) {
        for (slot, px) in [
            (&mut spacing.top, self.top),
            (&mut spacing.right, self.right),
            (&mut spacing.bottom, self.bottom),
            (&mut spacing.left, self.left),
        ] {
            if let Some(px) = pixels(px) {
                *slot = px;
            }
        }
    }
}

impl ComputedTypography {
    fn apply_to(&self, typography: &mut Typography) {
        if let Some(size) = self.font_size.and_then(pixels) {
            typography.font_size = size;
        }
        if let Some(weight) = self.font_weight.as_ref().and_then(weight_name) {
            typography.font_weight = String::from(weight);
        }
        if let Some(align) = self.text_align.as_deref().and_then(TextAlign::from_css) {
            typography.text_align = Some(align);
        }
        match &self.line_height {
            Some(CssValue::Number(n)) if n.is_finite() => typography.line_height = n.to_string(),
            Some(CssValue::Text(text)) if !text.trim().is_empty() => {
                typography.line_height = text.trim().to_owned();
            }
            _ => {}
        }
    }
}

/// Formats a computed pixel value, dropping a zero fraction.
fn pixels(px: f64) -> Option<String> {
    if !px.is_finite() {
        return None;
    }
    // Normalizes -0 so it prints as "0".
    let px = if px == 0.0 { 0.0 } else { px };
    Some(px.to_string())
}

/// Maps a CSS font weight to its utility name.
fn weight_name(weight: &CssValue) -> Option<&'static str> {
    const NAMES: [&str; 9] = [
        "thin",
        "extralight",
        "light",
        "normal",
        "medium",
        "semibold",
        "bold",
        "extrabold",
        "black",
    ];
    let numeric = match weight {
        CssValue::Number(n) => *n,
        CssValue::Text(text) => match text.trim() {
            "normal" => return Some("normal"),
            "bold" => return Some("bold"),
            other => other.parse().ok()?,
        },
    };
    if !(1.0..=1000.0).contains(&numeric) {
        return None;
    }
    #[expect(
        clippy::cast_possible_truncation,
        reason = "clamped to 1..=9 before the cast"
    )]
    let step = (numeric / 100.0).round().clamp(1.0, 9.0) as usize;
    Some(NAMES[step - 1])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(json: &str) -> ElementSelection {
        match serde_json::from_str(json).unwrap() {
            BridgeMessage::ElementSelected(selection) => selection,
            other => panic!("expected a selection, got {other:?}"),
        }
    }

    #[test]
    fn pixels_drop_zero_fraction() {
        assert_eq!(pixels(16.0).as_deref(), Some("16"));
        assert_eq!(pixels(12.5).as_deref(), Some("12.5"));
        assert_eq!(pixels(-0.0).as_deref(), Some("0"));
        assert_eq!(pixels(f64::NAN), None);
    }

    #[test]
    fn weights_map_to_names() {
        let name = |v: CssValue| weight_name(&v);
        assert_eq!(name(CssValue::Text("600".into())), Some("semibold"));
        assert_eq!(name(CssValue::Number(400.0)), Some("normal"));
        assert_eq!(name(CssValue::Number(950.0)), Some("black"));
        assert_eq!(name(CssValue::Number(120.0)), Some("thin"));
        assert_eq!(name(CssValue::Text("bold".into())), Some("bold"));
        assert_eq!(name(CssValue::Text("bolder".into())), None);
        assert_eq!(name(CssValue::Number(0.0)), None);
    }

    #[test]
    fn selection_overwrites_reported_fields_only() {
        let mut state = StyleState::starter();
        state.opacity = 40.0;
        state.border.radius = "6".into();

        selection(
            r#"{
                "type": "ELEMENT_SELECTED",
                "elementId": "hero",
                "elementTag": "P",
                "textContent": "Hello",
                "tailwindClasses": "mt-4 text-lg",
                "padding": {"top": 8, "bottom": 8, "left": 16, "right": 16},
                "typography": {"fontSize": 18, "fontWeight": "700", "textAlign": "start", "lineHeight": "28px"}
            }"#,
        )
        .apply_to(&mut state);

        assert_eq!(state.element_id, "hero");
        assert_eq!(state.element_tag, "p");
        assert_eq!(state.text_content, "Hello");
        assert_eq!(state.tailwind_classes, "mt-4 text-lg");
        assert_eq!(state.padding, Spacing::new("8", "16", "8", "16"));
        assert_eq!(state.typography.font_size, "18");
        assert_eq!(state.typography.font_weight, "bold");
        assert_eq!(state.typography.text_align, Some(TextAlign::Left));
        assert_eq!(state.typography.line_height, "28px");
        // Not reported: unchanged.
        assert_eq!(state.margin, StyleState::starter().margin);
        assert_eq!(state.typography.font_family, "inter");
        assert_eq!(state.opacity, 40.0);
        assert_eq!(state.border.radius, "6");
    }

    #[test]
    fn unknown_keywords_leave_fields() {
        let mut state = StyleState::starter();
        selection(
            r#"{"type": "ELEMENT_SELECTED", "typography": {"textAlign": "-webkit-match-parent", "fontWeight": "lighter"}}"#,
        )
        .apply_to(&mut state);
        assert_eq!(state.typography, StyleState::starter().typography);
    }

    #[test]
    fn passthrough_messages_parse() {
        let ready: BridgeMessage = serde_json::from_str(r#"{"type": "READY"}"#).unwrap();
        assert_eq!(ready, BridgeMessage::Ready);

        let error: BridgeMessage = serde_json::from_str(
            r#"{"type": "ERROR", "errorType": "TypeError", "message": "x is undefined", "line": 3}"#,
        )
        .unwrap();
        let BridgeMessage::Error(error) = error else {
            panic!("expected an error message");
        };
        assert_eq!(error.kind, "TypeError");
        assert_eq!(error.line, Some(3));
        assert_eq!(error.stack, None);
    }
}
