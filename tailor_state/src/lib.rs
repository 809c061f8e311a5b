// Copyright 2025 the Tailor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tailor_state --heading-base-level=0

//! Tailor State: the style snapshot of one inspected element.
//!
//! [`StyleState`] is the canonical, serializable record of everything the
//! inspector can edit on an element: box model, sizing, typography,
//! background, border, planar and spatial transforms, effects, and the
//! responsive [`Breakpoint`] the edits target. Snapshots are plain values;
//! a controller (see `tailor_inspector`) keeps one current snapshot plus
//! history, and `tailor_compile` turns a snapshot into utility classes.
//!
//! ## Defaults and sentinels
//!
//! Every field has a total default. [`StyleState::default`] puts each field at
//! its *no-op sentinel*, the value for which the compiler emits nothing:
//!
//! | Fields | Sentinel |
//! |--------|----------|
//! | spacing, size, typography, background, border strings | `""` |
//! | translate, rotate, skew, 3D rotations, perspective | `0` |
//! | `transforms.scale`, `opacity` | `100` |
//! | `blur`, `backdropBlur` | `None` or `0` |
//! | `typography.textAlign` | `None` |
//!
//! [`StyleState::starter`] is the snapshot a new editor session opens with.
//!
//! ## Editing
//!
//! Edits are typed: [`StylePatch`] replaces a top-level field and
//! [`NestedPatch`] replaces one member of a nested record.
//!
//! ```rust
//! use tailor_state::{NestedPatch, Side, StylePatch, StyleState};
//!
//! let mut state = StyleState::starter();
//! NestedPatch::padding(Side::Top, "4").apply_to(&mut state);
//! StylePatch::Opacity(50.0).apply_to(&mut state);
//!
//! assert_eq!(state.padding.top, "4");
//! assert_eq!(state.padding.bottom, "3");
//! assert_eq!(state.opacity, 50.0);
//! ```
//!
//! ## Restoring persisted snapshots
//!
//! [`StyleState::merge_json`] restores a snapshot leniently: keys are merged
//! one by one over a base snapshot, and a key with the wrong shape keeps the
//! base value instead of failing the whole load.
//!
//! ```rust
//! use tailor_state::StyleState;
//!
//! let report = StyleState::merge_json(
//!     &StyleState::default(),
//!     r#"{"textContent": "Hi", "padding": "oops"}"#,
//! )
//! .unwrap();
//! assert_eq!(report.state.text_content, "Hi");
//! assert_eq!(report.rejected, ["padding"]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod breakpoint;
mod load;
mod patch;
mod state;

pub use breakpoint::{Breakpoint, ParseBreakpointError};
pub use load::{JsonError, LoadError, LoadReport};
pub use patch::{Edit, NestedPatch, StylePatch};
pub use state::{
    BLUR_MAX, Background, BackgroundField, Border, BorderField, OPACITY_MAX, ParseTextAlignError,
    Side, Size, SizeField, Spacing, StyleState, TextAlign, Transform2d, Transform2dField,
    Transform3d, Transform3dField, Typography, TypographyField, clamp_blur, clamp_opacity,
};
