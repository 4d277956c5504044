// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic output helpers for consistent error/warning formatting.
//!
//! Provides ANSI color support with automatic terminal detection. Everything
//! goes to stderr so it never mixes with the checked program's stdout.

use std::io::{self, IsTerminal, Write};

/// Print an error message to stderr.
///
/// Displays in red when stderr is a terminal, plain text otherwise.
pub fn print_error(msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_error(&mut io::stderr(), msg, is_tty);
}

/// Write an error message to a writer with explicit terminal flag.
fn write_error<W: Write>(writer: &mut W, msg: impl std::fmt::Display, is_terminal: bool) {
    if is_terminal {
        let _ = writeln!(writer, "\x1b[31mleakcheck: error: {}\x1b[0m", msg);
    } else {
        let _ = writeln!(writer, "leakcheck: error: {}", msg);
    }
}

/// Print a warning message to stderr.
///
/// Displays in yellow when stderr is a terminal, plain text otherwise.
pub fn print_warning(msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_warning(&mut io::stderr(), msg, is_tty);
}

/// Write a warning message to a writer with explicit terminal flag.
fn write_warning<W: Write>(writer: &mut W, msg: impl std::fmt::Display, is_terminal: bool) {
    if is_terminal {
        let _ = writeln!(writer, "\x1b[33mleakcheck: warning: {}\x1b[0m", msg);
    } else {
        let _ = writeln!(writer, "leakcheck: warning: {}", msg);
    }
}

/// Print a debug message to stderr when `enabled`.
///
/// Used for `LEAKCHECK_DEBUG` tracing of the run.
pub fn print_debug(enabled: bool, msg: impl std::fmt::Display) {
    if enabled {
        write_debug(&mut io::stderr(), msg);
    }
}

fn write_debug<W: Write>(writer: &mut W, msg: impl std::fmt::Display) {
    let _ = writeln!(writer, "leakcheck: debug: {}", msg);
}

#[cfg(test)]
#[path = "output_diagnostic_tests.rs"]
mod tests;
