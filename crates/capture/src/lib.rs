// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pipe demultiplexing and stream capture for leakcheck.
//!
//! This crate drains a child's stdout and stderr pipes without assuming
//! either is ready first, keeping every read as an ordered chunk so the
//! captured text can be reconstructed byte for byte.

mod demux;
mod nbio;
mod stream;
mod transcript;

pub use demux::{Demux, DEFAULT_CHUNK_SIZE};
pub use stream::{Capture, CapturedStream, StreamKind, SEGMENT_DELIMITER};
pub use transcript::{Transcript, TranscriptError};
