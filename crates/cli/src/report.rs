// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Echoing captured output and announcing the outcome.

use std::io::{self, Write};

use leakcheck_capture::{Capture, StreamKind};

use crate::classify::Verdict;

/// First bytes of the banner some Valgrind builds print on stdout.
pub const BANNER_PREFIX: &str = "** VALGRIND_ROOT=";

/// Number of lines in that banner.
pub const BANNER_LINES: usize = 3;

/// Exit codes of the wrapper.
pub mod exit_codes {
    /// No definite or indirect leaks.
    pub const SUCCESS: i32 = 0;
    /// Leak found, malformed report, tool failure or wrapper error.
    pub const FAILURE: i32 = 1;
}

/// Final result of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Success,
    LeakDetected,
    MalformedOutput,
    /// Leak reports were clean but Valgrind itself exited non-zero, and
    /// the tool status was asked to count.
    ToolFailed { status: i32 },
}

impl Outcome {
    /// Combine the leak verdict with Valgrind's exit status.
    ///
    /// The verdict alone decides unless `strict_tool_status` is set. With
    /// `--error-exitcode=1` Valgrind also exits 1 for possibly lost blocks,
    /// which the leak gate tolerates.
    pub fn resolve(verdict: &Verdict, tool_status: i32, strict_tool_status: bool) -> Self {
        match verdict {
            Verdict::Leaked { .. } => Outcome::LeakDetected,
            Verdict::Malformed { .. } => Outcome::MalformedOutput,
            Verdict::Clean { .. } if tool_status != 0 && strict_tool_status => {
                Outcome::ToolFailed {
                    status: tool_status,
                }
            }
            Verdict::Clean { .. } => Outcome::Success,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Success => exit_codes::SUCCESS,
            _ => exit_codes::FAILURE,
        }
    }

    /// Stream the banner is written to.
    pub fn stream(&self) -> StreamKind {
        match self {
            Outcome::Success => StreamKind::Stdout,
            _ => StreamKind::Stderr,
        }
    }

    pub fn banner(&self) -> String {
        match self {
            Outcome::Success => {
                "\n\n#### Valgrind found no definite or indirect memory leaks.\n".to_string()
            }
            Outcome::LeakDetected => {
                "\n\n#### Valgrind found memory leaks.\n#### Exiting.\n".to_string()
            }
            Outcome::MalformedOutput => {
                "\n\n#### Malformed Valgrind output.\n#### Exiting.\n".to_string()
            }
            Outcome::ToolFailed { status } => {
                format!("\n\n#### Valgrind exited with status {}.\n#### Exiting.\n", status)
            }
        }
    }
}

/// Drop the leading banner from captured stdout, if it is there.
pub fn strip_banner(stdout: &[u8]) -> &[u8] {
    if !stdout.starts_with(BANNER_PREFIX.as_bytes()) {
        return stdout;
    }
    let mut rest = stdout;
    for _ in 0..BANNER_LINES {
        match rest.iter().position(|&b| b == b'\n') {
            Some(end) => rest = &rest[end + 1..],
            None => return &[],
        }
    }
    rest
}

/// Write the captured streams back out, stdout without its banner.
pub fn echo<O: Write, E: Write>(capture: &Capture, out: &mut O, err: &mut E) -> io::Result<()> {
    out.write_all(strip_banner(&capture.stdout.to_bytes()))?;
    out.flush()?;
    err.write_all(&capture.stderr.to_bytes())?;
    err.flush()
}

/// Write the outcome banner to the stream it belongs on.
pub fn announce<O: Write, E: Write>(outcome: Outcome, out: &mut O, err: &mut E) -> io::Result<()> {
    let writer: &mut dyn Write = match outcome.stream() {
        StreamKind::Stdout => out,
        StreamKind::Stderr => err,
    };
    writer.write_all(outcome.banner().as_bytes())?;
    writer.flush()
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
