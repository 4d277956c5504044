// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSONL transcript of a capture.
//!
//! One line per chunk in arrival order, then a line with the child's exit
//! code. Written once per run for CI artifact upload.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use crate::stream::{Capture, StreamKind};

#[derive(Debug, Error)]
pub enum TranscriptError {
    #[error("failed to write transcript: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode transcript entry: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct ChunkEntry<'a> {
    seq: u64,
    stream: StreamKind,
    bytes: usize,
    data: Cow<'a, str>,
}

#[derive(Serialize)]
struct ExitEntry {
    exit: i32,
}

pub struct Transcript {
    jsonl: BufWriter<File>,
}

impl Transcript {
    /// Create (or truncate) the transcript file.
    pub fn create(path: &Path) -> Result<Self, TranscriptError> {
        let file = File::create(path)?;
        Ok(Self {
            jsonl: BufWriter::new(file),
        })
    }

    /// Log every chunk of `capture` in the order it was read.
    pub fn log_capture(&mut self, capture: &Capture) -> Result<(), TranscriptError> {
        for (seq, (stream, chunk)) in capture.arrivals().enumerate() {
            let entry = ChunkEntry {
                seq: seq as u64,
                stream,
                bytes: chunk.len(),
                data: String::from_utf8_lossy(chunk),
            };
            serde_json::to_writer(&mut self.jsonl, &entry)?;
            self.jsonl.write_all(b"\n")?;
        }
        Ok(())
    }

    pub fn log_exit(&mut self, code: i32) -> Result<(), TranscriptError> {
        serde_json::to_writer(&mut self.jsonl, &ExitEntry { exit: code })?;
        self.jsonl.write_all(b"\n")?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), TranscriptError> {
        self.jsonl.flush()?;
        Ok(())
    }

    /// Write a complete transcript for one run.
    pub fn save(path: &Path, capture: &Capture, exit_code: i32) -> Result<(), TranscriptError> {
        let mut transcript = Self::create(path)?;
        transcript.log_capture(capture)?;
        transcript.log_exit(exit_code)?;
        transcript.flush()
    }
}

#[cfg(test)]
#[path = "transcript_tests.rs"]
mod tests;
