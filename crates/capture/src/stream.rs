// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Captured stream model.
//!
//! Each read from a pipe is kept as its own chunk. Line-oriented consumers
//! must work on the concatenation ([`CapturedStream::text`]) so that a line
//! split across two reads is seen whole.

use std::fmt;

use serde::Serialize;

/// Separator placed between chunks by [`CapturedStream::delimited`].
pub const SEGMENT_DELIMITER: &str = "|___|";

/// Which pipe a chunk was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamKind {
    Stdout,
    Stderr,
}

impl StreamKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StreamKind::Stdout => "stdout",
            StreamKind::Stderr => "stderr",
        }
    }
}

impl fmt::Display for StreamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered chunks read from one pipe.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedStream {
    chunks: Vec<Vec<u8>>,
}

impl CapturedStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a chunk. Empty reads mark end-of-file and are not stored.
    pub fn push(&mut self, chunk: &[u8]) {
        if !chunk.is_empty() {
            self.chunks.push(chunk.to_vec());
        }
    }

    /// Chunks in read order.
    pub fn chunks(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.chunks.iter().map(Vec::as_slice)
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Total number of captured bytes.
    pub fn byte_len(&self) -> usize {
        self.chunks.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Byte-for-byte concatenation of every chunk in read order.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.chunks.concat()
    }

    /// The concatenated stream decoded as UTF-8, replacing invalid sequences.
    ///
    /// Decoding happens after concatenation so a multi-byte character split
    /// across two reads survives intact.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.to_bytes()).into_owned()
    }

    /// Chunks decoded individually and joined with [`SEGMENT_DELIMITER`].
    ///
    /// Only meant for diagnostics; the read boundaries are visible here.
    pub fn delimited(&self) -> String {
        self.chunks
            .iter()
            .map(|chunk| String::from_utf8_lossy(chunk))
            .collect::<Vec<_>>()
            .join(SEGMENT_DELIMITER)
    }
}

impl<T: AsRef<[u8]>> FromIterator<T> for CapturedStream {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stream = Self::new();
        for chunk in iter {
            stream.push(chunk.as_ref());
        }
        stream
    }
}

/// Both captured streams of one child process.
#[derive(Debug, Clone, Default)]
pub struct Capture {
    pub stdout: CapturedStream,
    pub stderr: CapturedStream,
    /// Stream of each stored chunk, in global arrival order.
    order: Vec<StreamKind>,
}

impl Capture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a chunk read from `kind`.
    pub fn record(&mut self, kind: StreamKind, chunk: &[u8]) {
        if chunk.is_empty() {
            return;
        }
        self.order.push(kind);
        match kind {
            StreamKind::Stdout => self.stdout.push(chunk),
            StreamKind::Stderr => self.stderr.push(chunk),
        }
    }

    pub fn stream(&self, kind: StreamKind) -> &CapturedStream {
        match kind {
            StreamKind::Stdout => &self.stdout,
            StreamKind::Stderr => &self.stderr,
        }
    }

    /// Every chunk of both streams, in the order it was read.
    pub fn arrivals(&self) -> impl Iterator<Item = (StreamKind, &[u8])> + '_ {
        let mut stdout = self.stdout.chunks();
        let mut stderr = self.stderr.chunks();
        self.order.iter().filter_map(move |kind| {
            let chunk = match kind {
                StreamKind::Stdout => stdout.next(),
                StreamKind::Stderr => stderr.next(),
            }?;
            Some((*kind, chunk))
        })
    }
}

#[cfg(test)]
#[path = "stream_tests.rs"]
mod tests;
