// Copyright 2025 the Tailor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Library half of the `tailor` binary: argument definitions, logging setup,
//! session scripts, and the subcommands themselves.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod script;
