// Copyright 2025 the Tailor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Logging setup for the `tailor` binary.
//!
//! Events go to stderr so that stdout carries only compiled output. `RUST_LOG`
//! takes precedence over the `-v` count when it is set.

use std::io;

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Crates whose events follow the verbosity flag.
const CRATES: [&str; 5] = [
    "tailor_cli",
    "tailor_compile",
    "tailor_inspector",
    "tailor_state",
    "tailor_timing",
];

/// Maps a `-v` count to a level: warnings by default, then info, debug, trace.
#[must_use]
pub fn level_for(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Builds the event filter for `level`, unless `RUST_LOG` overrides it.
#[must_use]
pub fn env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives(level)))
}

/// Installs the global subscriber.
pub fn init_logging(verbose: u8) {
    let layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(verbose >= 2)
        .without_time();
    tracing_subscriber::registry()
        .with(env_filter(level_for(verbose)))
        .with(layer)
        .init();
}

/// Other crates stay at `warn`; ours follow `level`.
fn directives(level: Level) -> String {
    let level = level.as_str().to_lowercase();
    let mut directives = String::from("warn");
    for krate in CRATES {
        directives.push_str(&format!(",{krate}={level}"));
    }
    directives
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for(0), Level::WARN);
        assert_eq!(level_for(1), Level::INFO);
        assert_eq!(level_for(2), Level::DEBUG);
        assert_eq!(level_for(9), Level::TRACE);
    }

    #[test]
    fn directives_cover_workspace_crates() {
        let directives = directives(Level::DEBUG);
        assert!(directives.starts_with("warn,"));
        assert!(directives.contains("tailor_inspector=debug"));
        assert_eq!(directives.matches('=').count(), CRATES.len());
    }
}
