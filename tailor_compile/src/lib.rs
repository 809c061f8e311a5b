// Copyright 2025 the Tailor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tailor_compile --heading-base-level=0

//! Tailor Compile: utility classes and markup from a style snapshot.
//!
//! This crate holds the two pure halves of the inspector:
//!
//! - [`compile`] turns a [`StyleState`](tailor_state::StyleState) into an
//!   ordered, duplicate-free [`ClassList`] of utility classes.
//! - [`generate_markup`] renders the inspected element as an HTML fragment
//!   carrying a class string, usually the one picked by [`class_source`].
//!
//! Both are total: every snapshot compiles, and calling them twice on the same
//! snapshot yields the same output.
//!
//! ## Emission rules
//!
//! A token is emitted only when its field differs from the no-op sentinel, so
//! the schema default compiles to the empty string. Every token carries the
//! snapshot's breakpoint prefix (`md:`, `2xl:`, …), or none for `auto` and
//! `base`.
//!
//! | Fields | Token shape |
//! |--------|-------------|
//! | padding, margin | `pt-4`, `mb-2` (spacing scale, sides top/bottom/left/right) |
//! | size, font size, border width/radius | `w-[120px]`, `text-[18px]`, `rounded-[6px]` |
//! | font weight, tracking, leading, alignment | `font-semibold`, `tracking-tight`, `text-left` |
//! | translate, rotate, skew | `translate-x-[12px]`, `rotate-[45deg]` |
//! | scale, opacity | `scale-[1.25]`, `opacity-[0.50]` |
//! | 3D rotations, perspective | `[transform:rotateX(30deg)]`, `[perspective:800px]` |
//! | blur, backdrop blur | `blur-[4px]`, `backdrop-blur-[6px]` |
//! | background and border colors | `bg-[#0ea5e9]`, `border-[red]` |
//!
//! ## Example
//!
//! ```rust
//! use tailor_compile::{MarkupOptions, class_source, compile, generate_markup};
//! use tailor_state::{NestedPatch, Side, StyleState};
//!
//! let mut state = StyleState::starter();
//! state.tailwind_classes.clear();
//! NestedPatch::padding(Side::Top, "4").apply_to(&mut state);
//!
//! let classes = compile(&state).to_string();
//! assert_eq!(
//!     classes,
//!     "pt-4 pb-3 pl-2 pr-2 text-[18px] font-semibold tracking-tight leading-normal text-left",
//! );
//!
//! let markup = generate_markup(&state, class_source(&state, &classes), &MarkupOptions::default());
//! assert!(markup.starts_with(r#"<h2 class="pt-4 pb-3"#));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod classes;
mod markup;

pub use classes::{ClassList, compile, compile_to_string};
pub use markup::{Escape, MarkupOptions, class_source, generate_markup};
