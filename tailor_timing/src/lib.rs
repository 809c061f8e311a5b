// Copyright 2025 the Tailor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tailor_timing --heading-base-level=0

//! Tailor Timing: host-agnostic debouncing.
//!
//! The inspector debounces two things: typed text before it becomes an edit
//! ([`INPUT_DELAY`]) and snapshot writes after the state changes
//! ([`PERSIST_DELAY`]). Neither owns a timer thread. A host drives them by
//! passing the current time in, either from its own event loop or through a
//! [`Clock`]:
//!
//! - [`Debouncer`] is the single-slot core: schedule a value, poll it out once
//!   its deadline passes, or flush or cancel it.
//! - [`Debounced`] pairs a debouncer with a callback and cancels on drop. It
//!   is meant for hosts whose callback owns what it touches, such as a
//!   preview refresh. Owners that need `&mut` access to themselves when a
//!   value is released hold a bare [`Debouncer`] and poll it instead.
//! - [`ManualClock`] is a shared, hand-advanced clock for tests and replays;
//!   [`SystemClock`] (with the `std` feature) reads the monotonic clock.
//!
//! ```rust
//! use tailor_timing::{Clock, Debouncer, ManualClock, PERSIST_DELAY};
//! use core::time::Duration;
//!
//! let clock = ManualClock::new();
//! let mut writes = Debouncer::new(PERSIST_DELAY);
//!
//! for revision in 1..=5 {
//!     writes.schedule(clock.now(), revision);
//!     clock.advance(Duration::from_millis(50));
//! }
//! assert_eq!(writes.poll(clock.now()), None);
//!
//! clock.advance(PERSIST_DELAY);
//! assert_eq!(writes.poll(clock.now()), Some(5));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod clock;
mod debounce;

#[cfg(feature = "std")]
pub use clock::SystemClock;
pub use clock::{Clock, ManualClock};
pub use debounce::{Debounced, Debouncer, INPUT_DELAY, PERSIST_DELAY};
