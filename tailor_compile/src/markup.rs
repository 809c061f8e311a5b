// Copyright 2025 the Tailor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! HTML fragments for the inspected element.

use alloc::string::String;
use core::fmt::{self, Write as _};

use serde::{Deserialize, Serialize};
use tailor_state::StyleState;

/// Tag used when the snapshot's tag normalizes to nothing.
const FALLBACK_TAG: &str = "div";

/// How interpolated text is written into generated markup.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Escape {
    /// Escape `&`, `<`, `>` and `"` in text content and attribute values.
    #[default]
    Html,
    /// Interpolate text content and attribute values verbatim.
    Raw,
}

/// Options for [`generate_markup`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkupOptions {
    /// Escape policy for text and attributes.
    pub escape: Escape,
}

impl MarkupOptions {
    /// Options that write text verbatim.
    pub const RAW: Self = Self {
        escape: Escape::Raw,
    };

    /// Returns these options with `escape` replaced.
    #[must_use]
    pub const fn with_escape(mut self, escape: Escape) -> Self {
        self.escape = escape;
        self
    }
}

/// Picks the class string shown in generated markup.
///
/// An explicit, non-blank `tailwindClasses` override on the snapshot wins over
/// the compiled string.
///
/// ```rust
/// use tailor_compile::class_source;
/// use tailor_state::StyleState;
///
/// let mut state = StyleState::default();
/// assert_eq!(class_source(&state, "pt-4"), "pt-4");
/// state.tailwind_classes = "px-2 font-bold".into();
/// assert_eq!(class_source(&state, "pt-4"), "px-2 font-bold");
/// ```
#[must_use]
pub fn class_source<'a>(state: &'a StyleState, compiled: &'a str) -> &'a str {
    let explicit = state.tailwind_classes.trim();
    if explicit.is_empty() {
        compiled
    } else {
        explicit
    }
}

/// Renders the element as an HTML fragment carrying `classes`.
///
/// A non-empty `link` wraps the element in an anchor, with the element
/// indented on its own line.
///
/// ```rust
/// use tailor_compile::{MarkupOptions, generate_markup};
/// use tailor_state::StyleState;
///
/// let mut state = StyleState::starter();
/// state.text_content = "Fish & Chips".into();
/// assert_eq!(
///     generate_markup(&state, "pb-3", &MarkupOptions::default()),
///     r#"<h2 class="pb-3">Fish &amp; Chips</h2>"#,
/// );
///
/// state.link = "/menu".into();
/// assert_eq!(
///     generate_markup(&state, "pb-3", &MarkupOptions::RAW),
///     "<a href=\"/menu\">\n  <h2 class=\"pb-3\">Fish & Chips</h2>\n</a>",
/// );
/// ```
#[must_use]
pub fn generate_markup(state: &StyleState, classes: &str, options: &MarkupOptions) -> String {
    let tag = normalize_tag(&state.element_tag);
    let text = Escaped(&state.text_content, options.escape);
    let classes = Escaped(classes.trim(), options.escape);

    let mut out = String::new();
    // Writing into a `String` cannot fail.
    let _ = if state.link.is_empty() {
        write!(out, "<{tag} class=\"{classes}\">{text}</{tag}>")
    } else {
        let href = Escaped(&state.link, options.escape);
        write!(
            out,
            "<a href=\"{href}\">\n  <{tag} class=\"{classes}\">{text}</{tag}>\n</a>"
        )
    };
    out
}

/// Lowercases the tag and keeps only ASCII alphanumerics and `-`.
fn normalize_tag(tag: &str) -> String {
    let tag: String = tag
        .trim()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .map(|c| c.to_ascii_lowercase())
        .collect();
    if tag.starts_with(|c: char| c.is_ascii_alphabetic()) {
        tag
    } else {
        String::from(FALLBACK_TAG)
    }
}

struct Escaped<'a>(&'a str, Escape);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.1 == Escape::Raw {
            return f.write_str(self.0);
        }
        let mut rest = self.0;
        while let Some(at) = rest.find(['&', '<', '>', '"']) {
            f.write_str(&rest[..at])?;
            f.write_str(match rest.as_bytes()[at] {
                b'&' => "&amp;",
                b'<' => "&lt;",
                b'>' => "&gt;",
                _ => "&quot;",
            })?;
            rest = &rest[at + 1..];
        }
        f.write_str(rest)
    }
}
