// Copyright 2025 the Tailor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Snapshot to utility-class compilation.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt::{self, Write as _};

use smallvec::SmallVec;
use tailor_state::{StyleState, Transform2d, Transform3d};

/// Inline capacity for compiled tokens.
///
/// A heavily edited element rarely produces more than a dozen tokens.
const INLINE_TOKENS: usize = 16;

/// An ordered, duplicate-free list of utility classes.
///
/// Order is the order tokens were first pushed; pushing a token that is
/// already present is a no-op. [`Display`](fmt::Display) joins the tokens
/// with single spaces.
///
/// ```rust
/// use tailor_compile::ClassList;
///
/// let mut list = ClassList::new();
/// assert!(list.push("pt-4".into()));
/// assert!(list.push("pb-2".into()));
/// assert!(!list.push("pt-4".into()));
/// assert_eq!(list.to_string(), "pt-4 pb-2");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassList {
    tokens: SmallVec<[String; INLINE_TOKENS]>,
}

impl ClassList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the list holds no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns the number of tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if `token` is present.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    /// Appends `token` unless an identical token is already present.
    ///
    /// Returns `true` if the token was added.
    pub fn push(&mut self, token: String) -> bool {
        if self.contains(&token) {
            return false;
        }
        self.tokens.push(token);
        true
    }

    /// Iterates over the tokens in order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.tokens.iter().map(String::as_str)
    }

    /// Consumes the list, returning its tokens.
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.tokens.into_vec()
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_char(' ')?;
            }
            f.write_str(token)?;
        }
        Ok(())
    }
}

/// Compiles a snapshot into its ordered utility classes.
///
/// Each token is emitted only when its source value differs from the no-op
/// sentinel, and every token carries the snapshot's breakpoint prefix.
/// Emission order is fixed: padding, margin, size, typography, planar
/// transforms, spatial transforms, opacity, blur, backdrop blur, background,
/// border. Within padding and margin the sides go top, bottom, left, right.
///
/// Values are emitted without validation; callers clamp opacity and blur
/// before storing them.
///
/// ```rust
/// use tailor_compile::compile;
/// use tailor_state::{Breakpoint, StyleState};
///
/// let mut state = StyleState::default();
/// state.padding.top = "4".into();
/// state.opacity = 50.0;
/// state.breakpoint = Breakpoint::Md;
/// assert_eq!(compile(&state).to_string(), "md:pt-4 md:opacity-[0.50]");
/// ```
#[must_use]
pub fn compile(state: &StyleState) -> ClassList {
    let mut emit = Emitter {
        prefix: state.breakpoint.prefix(),
        out: ClassList::new(),
    };

    for (utility, value) in [
        ("pt", &state.padding.top),
        ("pb", &state.padding.bottom),
        ("pl", &state.padding.left),
        ("pr", &state.padding.right),
        ("mt", &state.margin.top),
        ("mb", &state.margin.bottom),
        ("ml", &state.margin.left),
        ("mr", &state.margin.right),
    ] {
        emit.keyword(utility, value);
    }

    emit.pixels("w", &state.size.width);
    emit.pixels("h", &state.size.height);
    emit.pixels("max-w", &state.size.max_width);
    emit.pixels("max-h", &state.size.max_height);

    let typo = &state.typography;
    emit.pixels("text", &typo.font_size);
    emit.keyword("font", &typo.font_weight);
    emit.keyword("tracking", &typo.letter_spacing);
    emit.keyword("leading", &typo.line_height);
    if let Some(align) = typo.text_align {
        emit.token(format_args!("text-{align}"));
    }

    transforms(&mut emit, &state.transforms);
    transforms3d(&mut emit, &state.transforms3d);

    if state.opacity != 100.0 {
        emit.token(format_args!("opacity-[{}]", Hundredths(state.opacity)));
    }
    if let Some(blur) = state.blur.filter(|b| *b > 0.0) {
        emit.token(format_args!("blur-[{blur}px]"));
    }
    if let Some(blur) = state.backdrop_blur.filter(|b| *b > 0.0) {
        emit.token(format_args!("backdrop-blur-[{blur}px]"));
    }

    emit.arbitrary("bg", &state.background.color);

    emit.arbitrary("border", &state.border.color);
    emit.pixels("border", &state.border.width);
    emit.pixels("rounded", &state.border.radius);

    emit.out
}

/// Compiles a snapshot straight to its space-joined class string.
#[must_use]
pub fn compile_to_string(state: &StyleState) -> String {
    compile(state).to_string()
}

fn transforms(emit: &mut Emitter, t: &Transform2d) {
    emit.number("translate-x", t.translate_x, "px");
    emit.number("translate-y", t.translate_y, "px");
    emit.number("rotate", t.rotate, "deg");
    if t.scale != 100.0 {
        emit.token(format_args!("scale-[{}]", Hundredths(t.scale)));
    }
    emit.number("skew-x", t.skew_x, "deg");
    emit.number("skew-y", t.skew_y, "deg");
}

fn transforms3d(emit: &mut Emitter, t: &Transform3d) {
    for (axis, degrees) in [("X", t.rotate_x), ("Y", t.rotate_y), ("Z", t.rotate_z)] {
        if degrees != 0.0 {
            emit.token(format_args!("[transform:rotate{axis}({degrees}deg)]"));
        }
    }
    if t.perspective != 0.0 {
        emit.token(format_args!("[perspective:{}px]", t.perspective * 100.0));
    }
}

struct Emitter {
    prefix: &'static str,
    out: ClassList,
}

impl Emitter {
    fn token(&mut self, body: fmt::Arguments<'_>) {
        let mut token = String::from(self.prefix);
        let _ = token.write_fmt(body);
        self.out.push(token);
    }

    /// `utility-value`, for spacing-scale units and named keywords.
    fn keyword(&mut self, utility: &str, value: &str) {
        if let Some(value) = present(value) {
            self.token(format_args!("{utility}-{}", Underscored(value)));
        }
    }

    /// `utility-[valuepx]`
    fn pixels(&mut self, utility: &str, value: &str) {
        if let Some(value) = present(value) {
            self.token(format_args!("{utility}-[{}px]", Underscored(value)));
        }
    }

    /// `utility-[value]`, for colors and other raw CSS values.
    fn arbitrary(&mut self, utility: &str, value: &str) {
        if let Some(value) = present(value) {
            self.token(format_args!("{utility}-[{}]", Underscored(value)));
        }
    }

    /// `utility-[valueunit]`, skipped at zero.
    fn number(&mut self, utility: &str, value: f64, unit: &str) {
        if value != 0.0 {
            self.token(format_args!("{utility}-[{value}{unit}]"));
        }
    }
}

fn present(value: &str) -> Option<&str> {
    let value = value.trim();
    (!value.is_empty()).then_some(value)
}

/// Writes a value with interior whitespace replaced by `_`, so a value such as
/// `rgb(0 0 0)` stays a single class token.
struct Underscored<'a>(&'a str);

impl fmt::Display for Underscored<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in self.0.chars() {
            f.write_char(if ch.is_whitespace() { '_' } else { ch })?;
        }
        Ok(())
    }
}

/// Writes a percentage as a two-decimal fraction (`50` writes `0.50`).
///
/// Exact ties round away from zero, so `62.5` writes `0.63`.
struct Hundredths(f64);

impl fmt::Display for Hundredths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0 / 100.0;
        write!(f, "{:.2}", value + tie_nudge(value))
    }
}

/// Offset that moves an exact hundredths tie off the halfway point.
///
/// A binary value lies exactly between two hundredths only when it is an odd
/// number of eighths. `{:.2}` rounds those to even.
fn tie_nudge(value: f64) -> f64 {
    let eighths = value * 8.0;
    if !(-1.0e12..=1.0e12).contains(&eighths) {
        return 0.0;
    }
    #[expect(clippy::cast_possible_truncation, reason = "range checked above")]
    let whole = eighths as i64;
    if whole as f64 != eighths || whole % 2 == 0 {
        0.0
    } else if value > 0.0 {
        0.001
    } else {
        -0.001
    }
}
