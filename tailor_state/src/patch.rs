// Copyright 2025 the Tailor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed edits against a [`StyleState`].
//!
//! [`StylePatch`] replaces one top-level field wholesale; [`NestedPatch`]
//! replaces a single member of a nested record and leaves its siblings
//! untouched. Both serialize with a `key` tag so that scripted sessions can
//! carry them as JSON:
//!
//! ```rust
//! use tailor_state::{NestedPatch, Side, StylePatch};
//!
//! let patch: StylePatch = serde_json::from_str(r#"{"key": "opacity", "value": 50}"#).unwrap();
//! assert_eq!(patch, StylePatch::Opacity(50.0));
//!
//! let nested: NestedPatch =
//!     serde_json::from_str(r#"{"key": "padding", "nestedKey": "top", "value": "4"}"#).unwrap();
//! assert_eq!(nested, NestedPatch::padding(Side::Top, "4"));
//! ```

use alloc::string::String;

use serde::{Deserialize, Serialize};

use crate::{
    Background, BackgroundField, Border, BorderField, Breakpoint, Side, Size, SizeField, Spacing,
    StyleState, Transform2d, Transform2dField, Transform3d, Transform3dField, Typography,
    TypographyField,
};

/// Replacement of one top-level [`StyleState`] field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "key", content = "value", rename_all = "camelCase")]
pub enum StylePatch {
    /// `elementId`
    ElementId(String),
    /// `elementTag`
    ElementTag(String),
    /// `textContent`
    TextContent(String),
    /// `link`
    Link(String),
    /// `tailwindClasses`
    TailwindClasses(String),
    /// `margin`
    Margin(Spacing),
    /// `padding`
    Padding(Spacing),
    /// `size`
    Size(Size),
    /// `typography`
    Typography(Typography),
    /// `background`
    Background(Background),
    /// `border`
    Border(Border),
    /// `transforms`
    Transforms(Transform2d),
    /// `transforms3d`
    Transforms3d(Transform3d),
    /// `opacity`
    Opacity(f64),
    /// `blur`
    Blur(Option<f64>),
    /// `backdropBlur`
    BackdropBlur(Option<f64>),
    /// `breakpoint`
    Breakpoint(Breakpoint),
}

impl StylePatch {
    /// Returns the JSON key of the field this patch replaces.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::ElementId(_) => "elementId",
            Self::ElementTag(_) => "elementTag",
            Self::TextContent(_) => "textContent",
            Self::Link(_) => "link",
            Self::TailwindClasses(_) => "tailwindClasses",
            Self::Margin(_) => "margin",
            Self::Padding(_) => "padding",
            Self::Size(_) => "size",
            Self::Typography(_) => "typography",
            Self::Background(_) => "background",
            Self::Border(_) => "border",
            Self::Transforms(_) => "transforms",
            Self::Transforms3d(_) => "transforms3d",
            Self::Opacity(_) => "opacity",
            Self::Blur(_) => "blur",
            Self::BackdropBlur(_) => "backdropBlur",
            Self::Breakpoint(_) => "breakpoint",
        }
    }

    /// Writes the patch into `state`.
    pub fn apply_to(self, state: &mut StyleState) {
        match self {
            Self::ElementId(v) => state.element_id = v,
            Self::ElementTag(v) => state.element_tag = v,
            Self::TextContent(v) => state.text_content = v,
            Self::Link(v) => state.link = v,
            Self::TailwindClasses(v) => state.tailwind_classes = v,
            Self::Margin(v) => state.margin = v,
            Self::Padding(v) => state.padding = v,
            Self::Size(v) => state.size = v,
            Self::Typography(v) => state.typography = v,
            Self::Background(v) => state.background = v,
            Self::Border(v) => state.border = v,
            Self::Transforms(v) => state.transforms = v,
            Self::Transforms3d(v) => state.transforms3d = v,
            Self::Opacity(v) => state.opacity = v,
            Self::Blur(v) => state.blur = v,
            Self::BackdropBlur(v) => state.backdrop_blur = v,
            Self::Breakpoint(v) => state.breakpoint = v,
        }
    }
}

/// Replacement of one member of a nested [`StyleState`] record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "key", rename_all = "camelCase")]
pub enum NestedPatch {
    /// One side of `margin`.
    Margin {
        /// Side to replace.
        #[serde(rename = "nestedKey")]
        side: Side,
        /// Spacing-scale value, or empty to unset.
        value: String,
    },
    /// One side of `padding`.
    Padding {
        /// Side to replace.
        #[serde(rename = "nestedKey")]
        side: Side,
        /// Spacing-scale value, or empty to unset.
        value: String,
    },
    /// One dimension of `size`.
    Size {
        /// Dimension to replace.
        #[serde(rename = "nestedKey")]
        field: SizeField,
        /// Pixel value, or empty to unset.
        value: String,
    },
    /// One member of `typography`.
    Typography {
        /// Member to replace.
        #[serde(rename = "nestedKey")]
        field: TypographyField,
        /// New value in string form.
        value: String,
    },
    /// One member of `background`.
    Background {
        /// Member to replace.
        #[serde(rename = "nestedKey")]
        field: BackgroundField,
        /// New value.
        value: String,
    },
    /// One member of `border`.
    Border {
        /// Member to replace.
        #[serde(rename = "nestedKey")]
        field: BorderField,
        /// New value.
        value: String,
    },
    /// One component of `transforms`.
    Transforms {
        /// Component to replace.
        #[serde(rename = "nestedKey")]
        field: Transform2dField,
        /// New value.
        value: f64,
    },
    /// One component of `transforms3d`.
    Transforms3d {
        /// Component to replace.
        #[serde(rename = "nestedKey")]
        field: Transform3dField,
        /// New value.
        value: f64,
    },
}

impl NestedPatch {
    /// Sets one side of `margin`.
    #[must_use]
    pub fn margin(side: Side, value: impl Into<String>) -> Self {
        Self::Margin {
            side,
            value: value.into(),
        }
    }

    /// Sets one side of `padding`.
    #[must_use]
    pub fn padding(side: Side, value: impl Into<String>) -> Self {
        Self::Padding {
            side,
            value: value.into(),
        }
    }

    /// Sets one dimension of `size`.
    #[must_use]
    pub fn size(field: SizeField, value: impl Into<String>) -> Self {
        Self::Size {
            field,
            value: value.into(),
        }
    }

    /// Sets one member of `typography`.
    #[must_use]
    pub fn typography(field: TypographyField, value: impl Into<String>) -> Self {
        Self::Typography {
            field,
            value: value.into(),
        }
    }

    /// Sets one member of `background`.
    #[must_use]
    pub fn background(field: BackgroundField, value: impl Into<String>) -> Self {
        Self::Background {
            field,
            value: value.into(),
        }
    }

    /// Sets one member of `border`.
    #[must_use]
    pub fn border(field: BorderField, value: impl Into<String>) -> Self {
        Self::Border {
            field,
            value: value.into(),
        }
    }

    /// Sets one component of `transforms`.
    #[must_use]
    pub fn transform(field: Transform2dField, value: f64) -> Self {
        Self::Transforms { field, value }
    }

    /// Sets one component of `transforms3d`.
    #[must_use]
    pub fn transform3d(field: Transform3dField, value: f64) -> Self {
        Self::Transforms3d { field, value }
    }

    /// Returns the JSON key of the record this patch targets.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Margin { .. } => "margin",
            Self::Padding { .. } => "padding",
            Self::Size { .. } => "size",
            Self::Typography { .. } => "typography",
            Self::Background { .. } => "background",
            Self::Border { .. } => "border",
            Self::Transforms { .. } => "transforms",
            Self::Transforms3d { .. } => "transforms3d",
        }
    }

    /// Writes the patch into `state`.
    pub fn apply_to(self, state: &mut StyleState) {
        match self {
            Self::Margin { side, value } => state.margin.set(side, value),
            Self::Padding { side, value } => state.padding.set(side, value),
            Self::Size { field, value } => state.size.set(field, value),
            Self::Typography { field, value } => state.typography.set(field, value),
            Self::Background { field, value } => state.background.set(field, value),
            Self::Border { field, value } => state.border.set(field, value),
            Self::Transforms { field, value } => state.transforms.set(field, value),
            Self::Transforms3d { field, value } => state.transforms3d.set(field, value),
        }
    }
}

/// Either kind of edit, as produced by an editable field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Edit {
    /// A nested-record edit.
    Nested(NestedPatch),
    /// A top-level replacement.
    Field(StylePatch),
}

impl Edit {
    /// Writes the edit into `state`.
    pub fn apply_to(self, state: &mut StyleState) {
        match self {
            Self::Field(patch) => patch.apply_to(state),
            Self::Nested(patch) => patch.apply_to(state),
        }
    }
}

impl From<StylePatch> for Edit {
    fn from(patch: StylePatch) -> Self {
        Self::Field(patch)
    }
}

impl From<NestedPatch> for Edit {
    fn from(patch: NestedPatch) -> Self {
        Self::Nested(patch)
    }
}
