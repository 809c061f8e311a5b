// Copyright 2025 the Tailor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Subcommand implementations.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use tailor_compile::{Escape, MarkupOptions, class_source, compile_to_string, generate_markup};
use tailor_inspector::{
    FileStorage, InspectorConfig, InspectorStore, MemoryStorage, SnapshotStorage,
};
use tailor_state::StyleState;
use tailor_timing::ManualClock;

use crate::cli::{CompileArgs, ReplayArgs};
use crate::script::{Step, parse_script};

/// Compiles a snapshot file and writes the class string, and optionally the
/// markup, to `out`.
///
/// # Errors
///
/// Fails if the file cannot be read or is not a JSON object. Fields with the
/// wrong shape are logged and take their defaults.
pub fn run_compile(args: &CompileArgs, out: &mut impl Write) -> Result<()> {
    let text = read(&args.state)?;
    let report = StyleState::merge_json(&StyleState::default(), &text)
        .with_context(|| format!("failed to parse {}", args.state.display()))?;
    if !report.is_clean() {
        tracing::warn!(rejected = ?report.rejected, "ignored malformed fields");
    }

    let mut state = report.state;
    if let Some(breakpoint) = args.breakpoint {
        state.breakpoint = breakpoint;
    }

    let classes = compile_to_string(&state);
    writeln!(out, "{classes}")?;
    if args.markup {
        let escape = if args.raw { Escape::Raw } else { Escape::Html };
        let options = MarkupOptions::default().with_escape(escape);
        let markup = generate_markup(&state, class_source(&state, &classes), &options);
        writeln!(out, "{markup}")?;
    }
    Ok(())
}

/// What a replay ended with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Steps executed.
    pub steps: usize,
    /// Final store revision.
    pub revision: u64,
    /// Undo steps left.
    pub history: usize,
    /// Final class string.
    pub classes: String,
}

/// Replays a session script, writing the class string after every step.
///
/// Time is simulated: it only passes on `wait` steps, and any pending write is
/// flushed at the end.
///
/// # Errors
///
/// Fails if the script or configuration cannot be read or parsed, or if
/// output cannot be written.
pub fn run_replay(args: &ReplayArgs, out: &mut impl Write) -> Result<ReplaySummary> {
    let steps = parse_script(&read(&args.script)?)
        .with_context(|| format!("failed to parse {}", args.script.display()))?;
    let config = match &args.config {
        Some(path) => serde_json::from_str::<InspectorConfig>(&read(path)?)
            .with_context(|| format!("invalid configuration in {}", path.display()))?,
        None => InspectorConfig::default(),
    };

    let clock = ManualClock::new();
    match &args.store {
        Some(dir) => {
            let store = InspectorStore::new(config, FileStorage::new(dir), clock.clone());
            replay(store, &clock, &steps, out)
        }
        None => {
            let store = InspectorStore::new(config, MemoryStorage::new(), clock.clone());
            replay(store, &clock, &steps, out)
        }
    }
}

fn replay<S: SnapshotStorage>(
    mut store: InspectorStore<S, ManualClock>,
    clock: &ManualClock,
    steps: &[Step],
    out: &mut impl Write,
) -> Result<ReplaySummary> {
    for (i, step) in steps.iter().enumerate() {
        let _span = tracing::debug_span!("step", index = i + 1, op = step.op()).entered();
        match step {
            Step::Update(patch) => store.update_state(patch.clone()),
            Step::Nested(patch) => store.update_nested_state(patch.clone()),
            Step::Reset => store.reset_state(),
            Step::Undo => {
                if !store.undo() {
                    tracing::info!("nothing to undo");
                }
            }
            Step::Message(message) => {
                store.handle_message(message);
            }
            Step::Wait { ms } => clock.advance(Duration::from_millis(*ms)),
        }
        store.poll();
        writeln!(out, "{:<7} {}", step.op(), store.generated_tailwind())?;
    }
    store.flush();

    let summary = ReplaySummary {
        steps: steps.len(),
        revision: store.revision(),
        history: store.history_len(),
        classes: store.generated_tailwind().to_owned(),
    };
    tracing::info!(
        steps = summary.steps,
        revision = summary.revision,
        history = summary.history,
        "replay finished"
    );
    Ok(summary)
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}
