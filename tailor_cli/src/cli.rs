// Copyright 2025 the Tailor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use tailor_state::Breakpoint;

/// Compile style snapshots to utility classes and replay inspector sessions.
#[derive(Debug, Parser)]
#[command(name = "tailor", version)]
pub struct Cli {
    /// What to do.
    #[command(subcommand)]
    pub command: Command,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compile a snapshot file and print its class string.
    Compile(CompileArgs),
    /// Replay a session script against an inspector store.
    Replay(ReplayArgs),
}

/// Arguments for `tailor compile`.
#[derive(Debug, Args)]
pub struct CompileArgs {
    /// JSON snapshot to compile. Missing fields take their defaults.
    #[arg(value_name = "STATE.json")]
    pub state: PathBuf,

    /// Compile for this breakpoint instead of the snapshot's own.
    #[arg(long, value_name = "BP")]
    pub breakpoint: Option<Breakpoint>,

    /// Also print the element's markup.
    #[arg(long)]
    pub markup: bool,

    /// Write markup text without HTML escaping.
    #[arg(long, requires = "markup")]
    pub raw: bool,
}

/// Arguments for `tailor replay`.
#[derive(Debug, Args)]
pub struct ReplayArgs {
    /// Session script with one JSON step per line.
    #[arg(value_name = "SCRIPT.jsonl")]
    pub script: PathBuf,

    /// Persist snapshots in this directory instead of in memory.
    #[arg(long, value_name = "DIR")]
    pub store: Option<PathBuf>,

    /// Inspector configuration as JSON.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
