// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! The wrapper forwards every command-line argument to Valgrind, so all of
//! its own settings come from the environment. Use these accessors instead
//! of calling `std::env::var()` directly.

/// Generated env var name constants.
mod names {
    include!(concat!(env!("OUT_DIR"), "/env_names.rs"));
}

// Re-export name constants for callers that need the raw name string.
pub use names::*;

use std::ffi::OsString;
use std::path::PathBuf;

/// `LEAKCHECK_VALGRIND` — Program launched in place of `valgrind`.
pub fn valgrind() -> Option<OsString> {
    std::env::var_os(names::LEAKCHECK_VALGRIND).filter(|v| !v.is_empty())
}

/// `LEAKCHECK_CHUNK_SIZE` — Maximum bytes per pipe read, unparsed.
pub fn chunk_size() -> Option<String> {
    var(names::LEAKCHECK_CHUNK_SIZE)
}

/// `LEAKCHECK_STRICT_TOOL_STATUS` — Also fail on a non-zero Valgrind status.
pub fn strict_tool_status() -> bool {
    var_flag(names::LEAKCHECK_STRICT_TOOL_STATUS)
}

/// `LEAKCHECK_TRANSCRIPT` — Path of the JSONL chunk transcript.
pub fn transcript() -> Option<PathBuf> {
    std::env::var_os(names::LEAKCHECK_TRANSCRIPT)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// `LEAKCHECK_DEBUG` — Emit wrapper diagnostics on stderr.
pub fn debug() -> bool {
    var_flag(names::LEAKCHECK_DEBUG)
}

fn var(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

fn var_flag(name: &str) -> bool {
    var(name).is_some_and(|v| is_truthy(&v))
}

/// Whether a flag value means "on".
pub fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
