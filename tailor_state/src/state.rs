// Copyright 2025 the Tailor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The style snapshot and its nested records.

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::Breakpoint;

/// Upper bound for [`StyleState::opacity`].
pub const OPACITY_MAX: f64 = 100.0;

/// Upper bound for [`StyleState::blur`] and [`StyleState::backdrop_blur`].
pub const BLUR_MAX: f64 = 50.0;

/// Clamps an opacity percentage to `[0, 100]`.
#[must_use]
pub fn clamp_opacity(value: f64) -> f64 {
    value.clamp(0.0, OPACITY_MAX)
}

/// Clamps a blur radius to `[0, 50]`.
#[must_use]
pub fn clamp_blur(value: f64) -> f64 {
    value.clamp(0.0, BLUR_MAX)
}

/// One side of a box-model record.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Top edge.
    Top,
    /// Right edge.
    Right,
    /// Bottom edge.
    Bottom,
    /// Left edge.
    Left,
}

/// Margin or padding on four sides.
///
/// An empty string means "unset". Any other value is a spacing-scale unit and
/// is emitted verbatim (`pt-4`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Spacing {
    /// Top edge.
    pub top: String,
    /// Right edge.
    pub right: String,
    /// Bottom edge.
    pub bottom: String,
    /// Left edge.
    pub left: String,
}

impl Spacing {
    /// Builds a record from its four sides, in CSS shorthand order.
    #[must_use]
    pub fn new(
        top: impl Into<String>,
        right: impl Into<String>,
        bottom: impl Into<String>,
        left: impl Into<String>,
    ) -> Self {
        Self {
            top: top.into(),
            right: right.into(),
            bottom: bottom.into(),
            left: left.into(),
        }
    }

    /// Returns the value for one side.
    #[must_use]
    pub fn get(&self, side: Side) -> &str {
        match side {
            Side::Top => &self.top,
            Side::Right => &self.right,
            Side::Bottom => &self.bottom,
            Side::Left => &self.left,
        }
    }

    /// Replaces the value for one side, leaving the others untouched.
    pub fn set(&mut self, side: Side, value: String) {
        let slot = match side {
            Side::Top => &mut self.top,
            Side::Right => &mut self.right,
            Side::Bottom => &mut self.bottom,
            Side::Left => &mut self.left,
        };
        *slot = value;
    }
}

/// Field selector for [`Size`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SizeField {
    /// `width`
    Width,
    /// `height`
    Height,
    /// `maxWidth`
    MaxWidth,
    /// `maxHeight`
    MaxHeight,
}

/// Explicit dimensions in pixels; empty strings are unset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Size {
    /// Width.
    pub width: String,
    /// Height.
    pub height: String,
    /// Maximum width.
    pub max_width: String,
    /// Maximum height.
    pub max_height: String,
}

impl Size {
    /// Returns the value of one dimension.
    #[must_use]
    pub fn get(&self, field: SizeField) -> &str {
        match field {
            SizeField::Width => &self.width,
            SizeField::Height => &self.height,
            SizeField::MaxWidth => &self.max_width,
            SizeField::MaxHeight => &self.max_height,
        }
    }

    /// Replaces one dimension.
    pub fn set(&mut self, field: SizeField, value: String) {
        let slot = match field {
            SizeField::Width => &mut self.width,
            SizeField::Height => &mut self.height,
            SizeField::MaxWidth => &mut self.max_width,
            SizeField::MaxHeight => &mut self.max_height,
        };
        *slot = value;
    }
}

/// Horizontal text alignment.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    /// `text-left`
    Left,
    /// `text-center`
    Center,
    /// `text-right`
    Right,
    /// `text-justify`
    Justify,
}

impl TextAlign {
    /// Returns the keyword used in utility classes.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::Justify => "justify",
        }
    }

    /// Maps a computed CSS `text-align` keyword.
    ///
    /// Logical keywords resolve for left-to-right text (`start` is left,
    /// `end` is right). Anything else returns `None`.
    #[must_use]
    pub fn from_css(keyword: &str) -> Option<Self> {
        match keyword.trim() {
            "start" | "-webkit-left" => Some(Self::Left),
            "end" | "-webkit-right" => Some(Self::Right),
            "-webkit-center" => Some(Self::Center),
            other => other.parse().ok(),
        }
    }
}

impl fmt::Display for TextAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no text alignment.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown text alignment `{0}`")]
pub struct ParseTextAlignError(pub String);

impl FromStr for TextAlign {
    type Err = ParseTextAlignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "center" => Ok(Self::Center),
            "right" => Ok(Self::Right),
            "justify" => Ok(Self::Justify),
            _ => Err(ParseTextAlignError(s.into())),
        }
    }
}

/// Field selector for the string-valued members of [`Typography`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TypographyField {
    /// `fontFamily`
    FontFamily,
    /// `fontSize`
    FontSize,
    /// `fontWeight`
    FontWeight,
    /// `letterSpacing`
    LetterSpacing,
    /// `lineHeight`
    LineHeight,
    /// `textAlign`; the value is parsed as a [`TextAlign`] keyword.
    TextAlign,
}

/// Font and text settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Typography {
    /// Font family name. Carried but not compiled.
    pub font_family: String,
    /// Font size in pixels.
    pub font_size: String,
    /// Weight keyword (`semibold`, `bold`, …).
    pub font_weight: String,
    /// Tracking keyword (`tight`, `wide`, …).
    pub letter_spacing: String,
    /// Leading keyword (`normal`, `relaxed`, …).
    pub line_height: String,
    /// Alignment, or `None` when unset.
    #[serde(deserialize_with = "lenient_text_align")]
    pub text_align: Option<TextAlign>,
}

impl Typography {
    /// Replaces one field from its string form.
    ///
    /// For [`TypographyField::TextAlign`] an empty or unknown keyword clears
    /// the alignment.
    pub fn set(&mut self, field: TypographyField, value: String) {
        match field {
            TypographyField::FontFamily => self.font_family = value,
            TypographyField::FontSize => self.font_size = value,
            TypographyField::FontWeight => self.font_weight = value,
            TypographyField::LetterSpacing => self.letter_spacing = value,
            TypographyField::LineHeight => self.line_height = value,
            TypographyField::TextAlign => self.text_align = value.parse().ok(),
        }
    }
}

// Persisted snapshots from older sessions may carry `""` or a CSS keyword.
fn lenient_text_align<'de, D>(deserializer: D) -> Result<Option<TextAlign>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(TextAlign::from_css))
}

/// Field selector for [`Background`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BackgroundField {
    /// `color`
    Color,
    /// `image`
    Image,
}

/// Background fill.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Background {
    /// Any CSS color, emitted as an arbitrary value.
    pub color: String,
    /// Image URL. Carried but not compiled.
    pub image: String,
}

impl Background {
    /// Replaces one field.
    pub fn set(&mut self, field: BackgroundField, value: String) {
        match field {
            BackgroundField::Color => self.color = value,
            BackgroundField::Image => self.image = value,
        }
    }
}

/// Field selector for [`Border`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BorderField {
    /// `color`
    Color,
    /// `width`
    Width,
    /// `radius`
    Radius,
}

/// Border stroke and corner radius.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Border {
    /// Any CSS color.
    pub color: String,
    /// Stroke width in pixels.
    pub width: String,
    /// Corner radius in pixels.
    pub radius: String,
}

impl Border {
    /// Replaces one field.
    pub fn set(&mut self, field: BorderField, value: String) {
        match field {
            BorderField::Color => self.color = value,
            BorderField::Width => self.width = value,
            BorderField::Radius => self.radius = value,
        }
    }
}

/// Field selector for [`Transform2d`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Transform2dField {
    /// `translateX`
    TranslateX,
    /// `translateY`
    TranslateY,
    /// `rotate`
    Rotate,
    /// `scale`
    Scale,
    /// `skewX`
    SkewX,
    /// `skewY`
    SkewY,
}

/// Planar transform.
///
/// Translation is in pixels, rotation and skew in degrees. `scale` is a
/// percentage where 100 is the identity.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Transform2d {
    /// Horizontal offset.
    pub translate_x: f64,
    /// Vertical offset.
    pub translate_y: f64,
    /// Rotation.
    pub rotate: f64,
    /// Uniform scale, in percent.
    pub scale: f64,
    /// Horizontal skew.
    pub skew_x: f64,
    /// Vertical skew.
    pub skew_y: f64,
}

impl Default for Transform2d {
    fn default() -> Self {
        Self {
            translate_x: 0.0,
            translate_y: 0.0,
            rotate: 0.0,
            scale: 100.0,
            skew_x: 0.0,
            skew_y: 0.0,
        }
    }
}

impl Transform2d {
    /// Replaces one component.
    pub fn set(&mut self, field: Transform2dField, value: f64) {
        let slot = match field {
            Transform2dField::TranslateX => &mut self.translate_x,
            Transform2dField::TranslateY => &mut self.translate_y,
            Transform2dField::Rotate => &mut self.rotate,
            Transform2dField::Scale => &mut self.scale,
            Transform2dField::SkewX => &mut self.skew_x,
            Transform2dField::SkewY => &mut self.skew_y,
        };
        *slot = value;
    }
}

/// Field selector for [`Transform3d`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Transform3dField {
    /// `rotateX`
    RotateX,
    /// `rotateY`
    RotateY,
    /// `rotateZ`
    RotateZ,
    /// `perspective`
    Perspective,
}

/// Spatial rotation and perspective.
///
/// Rotations are in degrees. `perspective` is a small integer that compiles
/// to hundreds of pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Transform3d {
    /// Rotation around the X axis.
    pub rotate_x: f64,
    /// Rotation around the Y axis.
    pub rotate_y: f64,
    /// Rotation around the Z axis.
    pub rotate_z: f64,
    /// Perspective distance, in hundreds of pixels.
    pub perspective: f64,
}

impl Transform3d {
    /// Replaces one component.
    pub fn set(&mut self, field: Transform3dField, value: f64) {
        let slot = match field {
            Transform3dField::RotateX => &mut self.rotate_x,
            Transform3dField::RotateY => &mut self.rotate_y,
            Transform3dField::RotateZ => &mut self.rotate_z,
            Transform3dField::Perspective => &mut self.perspective,
        };
        *slot = value;
    }
}

/// The editable visual properties of one inspected element.
///
/// Every field has a total default; [`StyleState::default`] puts every field
/// at its no-op value so that it compiles to no classes at all. The JSON form
/// uses camelCase keys (`elementId`, `transforms3d`, `backdropBlur`).
///
/// ```rust
/// use tailor_state::{Breakpoint, StyleState};
///
/// let state = StyleState::default();
/// assert_eq!(state.opacity, 100.0);
/// assert_eq!(state.transforms.scale, 100.0);
/// assert_eq!(state.breakpoint, Breakpoint::Base);
/// assert!(state.padding.top.is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleState {
    /// Opaque element id, from the document or generated by the preview.
    pub element_id: String,
    /// Lowercase HTML tag name.
    pub element_tag: String,
    /// Text content shown in generated markup.
    pub text_content: String,
    /// Optional link target; empty when the element is not linked.
    pub link: String,
    /// Raw class attribute captured from the element.
    pub tailwind_classes: String,
    /// Outer spacing.
    pub margin: Spacing,
    /// Inner spacing.
    pub padding: Spacing,
    /// Explicit dimensions.
    pub size: Size,
    /// Font and text settings.
    pub typography: Typography,
    /// Background fill.
    pub background: Background,
    /// Border stroke and radius.
    pub border: Border,
    /// Planar transform.
    pub transforms: Transform2d,
    /// Spatial transform.
    pub transforms3d: Transform3d,
    /// Opacity percentage in `[0, 100]`.
    pub opacity: f64,
    /// Layer blur radius in `[0, 50]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blur: Option<f64>,
    /// Backdrop blur radius in `[0, 50]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backdrop_blur: Option<f64>,
    /// Responsive tier every compiled token is scoped to.
    pub breakpoint: Breakpoint,
}

impl Default for StyleState {
    fn default() -> Self {
        Self {
            element_id: String::new(),
            element_tag: String::from("div"),
            text_content: String::new(),
            link: String::new(),
            tailwind_classes: String::new(),
            margin: Spacing::default(),
            padding: Spacing::default(),
            size: Size::default(),
            typography: Typography::default(),
            background: Background::default(),
            border: Border::default(),
            transforms: Transform2d::default(),
            transforms3d: Transform3d::default(),
            opacity: OPACITY_MAX,
            blur: None,
            backdrop_blur: None,
            breakpoint: Breakpoint::Base,
        }
    }
}

impl StyleState {
    /// The snapshot a fresh editor session opens with: the "Layers" panel
    /// heading of the starter page.
    #[must_use]
    pub fn starter() -> Self {
        Self {
            element_id: String::from("aura-emgn5hp8g9knbc3d"),
            element_tag: String::from("h2"),
            text_content: String::from("Layers"),
            tailwind_classes: String::from(
                "px-2 pb-3 text-[18px] md:text-[20px] font-semibold tracking-tight",
            ),
            padding: Spacing::new("", "2", "3", "2"),
            typography: Typography {
                font_family: String::from("inter"),
                font_size: String::from("18"),
                font_weight: String::from("semibold"),
                letter_spacing: String::from("tight"),
                line_height: String::from("normal"),
                text_align: Some(TextAlign::Left),
            },
            blur: Some(0.0),
            backdrop_blur: Some(0.0),
            breakpoint: Breakpoint::Auto,
            ..Self::default()
        }
    }

    /// Returns a copy with opacity and blur radii clamped to their ranges.
    #[must_use]
    pub fn clamped(mut self) -> Self {
        self.opacity = clamp_opacity(self.opacity);
        self.blur = self.blur.map(clamp_blur);
        self.backdrop_blur = self.backdrop_blur.map(clamp_blur);
        self
    }
}
