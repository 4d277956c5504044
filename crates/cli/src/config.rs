// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Runtime configuration assembled from the environment.

use std::ffi::OsString;
use std::path::PathBuf;

use leakcheck_capture::DEFAULT_CHUNK_SIZE;
use thiserror::Error;

use crate::env;
use crate::launcher::VALGRIND;
use crate::output_diagnostic::print_warning;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid chunk size {0:?}: expected a positive integer")]
    InvalidChunkSize(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Program launched with the memcheck flags.
    pub program: OsString,
    /// Maximum bytes per pipe read.
    pub chunk_size: usize,
    /// Fail on a non-zero tool status even when the leak reports are clean.
    pub strict_tool_status: bool,
    /// Where to write the JSONL chunk transcript, if anywhere.
    pub transcript: Option<PathBuf>,
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            program: OsString::from(VALGRIND),
            chunk_size: DEFAULT_CHUNK_SIZE,
            strict_tool_status: false,
            transcript: None,
            debug: false,
        }
    }
}

impl Config {
    /// Read every `LEAKCHECK_*` variable, falling back to defaults.
    ///
    /// An unparseable chunk size is reported as a warning and ignored.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let chunk_size = match env::chunk_size() {
            Some(raw) => parse_chunk_size(&raw).unwrap_or_else(|e| {
                print_warning(format_args!("ignoring {}: {}", env::LEAKCHECK_CHUNK_SIZE, e));
                defaults.chunk_size
            }),
            None => defaults.chunk_size,
        };

        Self {
            program: env::valgrind().unwrap_or(defaults.program),
            chunk_size,
            strict_tool_status: env::strict_tool_status(),
            transcript: env::transcript(),
            debug: env::debug(),
        }
    }
}

pub fn parse_chunk_size(raw: &str) -> Result<usize, ConfigError> {
    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidChunkSize(raw.to_string())),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
