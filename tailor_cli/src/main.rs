// Copyright 2025 the Tailor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `tailor`: compile style snapshots and replay inspector sessions.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tailor_cli::cli::{Cli, Command};
use tailor_cli::commands::{run_compile, run_replay};
use tailor_cli::logging::init_logging;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut stdout = io::stdout().lock();
    let result = match &cli.command {
        Command::Compile(args) => run_compile(args, &mut stdout),
        Command::Replay(args) => run_replay(args, &mut stdout).map(drop),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}
