// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! One wrapped Valgrind run, from launch to outcome.

use std::ffi::OsString;
use std::io::{self, Write};

use leakcheck_capture::{Demux, Transcript};
use thiserror::Error;

use crate::classify::{classify, Verdict};
use crate::config::Config;
use crate::launcher::{LaunchError, ToolCommand};
use crate::output_diagnostic::{print_debug, print_warning};
use crate::report::{self, Outcome};

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Launch(#[from] LaunchError),
    #[error("failed to capture valgrind output: {0}")]
    Capture(#[source] io::Error),
    #[error("failed to wait for valgrind: {0}")]
    Wait(#[source] io::Error),
    #[error("failed to echo valgrind output: {0}")]
    Echo(#[source] io::Error),
}

/// Run Valgrind over `forwarded`, echo its output to `out`/`err`, and
/// decide the outcome from its leak reports (and, in strict mode, its status).
///
/// The child is reaped on every path, including capture failures.
pub async fn run<I, S, O, E>(
    config: &Config,
    forwarded: I,
    out: &mut O,
    err: &mut E,
) -> Result<Outcome, RunError>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    O: Write,
    E: Write,
{
    let command = ToolCommand::new(config.program.clone(), forwarded);
    print_debug(config.debug, format_args!("running {}", command.display()));

    let (launched, pipes) = command.spawn()?;
    print_debug(config.debug, format_args!("started pid {}", launched.id()));

    let drained = match Demux::new(pipes.stdout, pipes.stderr) {
        Ok(demux) => demux.with_chunk_size(config.chunk_size).drain().await,
        Err(e) => Err(e),
    };
    let capture = match drained {
        Ok(capture) => capture,
        Err(e) => {
            let _ = launched.abort().await;
            return Err(RunError::Capture(e));
        }
    };
    let status = launched.wait().await.map_err(RunError::Wait)?;

    print_debug(
        config.debug,
        format_args!(
            "exit status {}; stdout {} bytes in {} chunks; stderr {} bytes in {} chunks",
            status,
            capture.stdout.byte_len(),
            capture.stdout.chunk_count(),
            capture.stderr.byte_len(),
            capture.stderr.chunk_count(),
        ),
    );

    if let Some(ref path) = config.transcript {
        // The verdict still stands when the transcript cannot be written.
        if let Err(e) = Transcript::save(path, &capture, status) {
            print_warning(format_args!("{}: {}", path.display(), e));
        }
    }

    report::echo(&capture, out, err).map_err(RunError::Echo)?;

    let verdict = classify(&capture.stderr.text());
    debug_verdict(config.debug, &verdict);

    let outcome = Outcome::resolve(&verdict, status, config.strict_tool_status);
    report::announce(outcome, out, err).map_err(RunError::Echo)?;
    Ok(outcome)
}

fn debug_verdict(enabled: bool, verdict: &Verdict) {
    match verdict {
        Verdict::Clean { reports } => {
            print_debug(enabled, format_args!("{} zero leak reports", reports.len()));
        }
        Verdict::Leaked { report } => print_debug(
            enabled,
            format_args!(
                "{}: {} bytes in {} blocks",
                report.kind,
                report.bytes.map_or("?".to_string(), |n| n.to_string()),
                report.blocks.map_or("?".to_string(), |n| n.to_string()),
            ),
        ),
        Verdict::Malformed { count } => {
            print_debug(enabled, format_args!("unexpected leak report count {}", count));
        }
    }
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
