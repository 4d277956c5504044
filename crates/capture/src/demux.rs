// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Stream demultiplexer.
//!
//! Drains a child's stdout and stderr pipes on a single thread. Both pipes
//! are registered with the tokio reactor and read as they become ready, so
//! neither is required to produce data before the other. Draining ends only
//! once both pipes have reached end-of-file.

use std::io;
use std::os::fd::OwnedFd;

use tokio::io::unix::AsyncFd;

use crate::nbio;
use crate::stream::{Capture, StreamKind};

/// Upper bound on the size of a single pipe read.
pub const DEFAULT_CHUNK_SIZE: usize = 10_000;

/// Reader over the two output pipes of one child process.
pub struct Demux {
    stdout: Option<AsyncFd<OwnedFd>>,
    stderr: Option<AsyncFd<OwnedFd>>,
    chunk_size: usize,
}

impl Demux {
    /// Register both pipes. Must be called from within a tokio runtime with
    /// I/O enabled.
    pub fn new(stdout: impl Into<OwnedFd>, stderr: impl Into<OwnedFd>) -> io::Result<Self> {
        Ok(Self {
            stdout: Some(register(stdout.into())?),
            stderr: Some(register(stderr.into())?),
            chunk_size: DEFAULT_CHUNK_SIZE,
        })
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    /// Read both pipes to end-of-file, keeping each read as one chunk.
    ///
    /// Each pipe is closed as soon as it reports end-of-file; the other keeps
    /// being read until it closes too.
    pub async fn drain(mut self) -> io::Result<Capture> {
        let mut capture = Capture::new();
        let mut out_buf = vec![0u8; self.chunk_size];
        let mut err_buf = vec![0u8; self.chunk_size];

        while self.stdout.is_some() || self.stderr.is_some() {
            let (kind, result) = tokio::select! {
                r = read_chunk(self.stdout.as_ref(), &mut out_buf), if self.stdout.is_some() => {
                    (StreamKind::Stdout, r)
                }
                r = read_chunk(self.stderr.as_ref(), &mut err_buf), if self.stderr.is_some() => {
                    (StreamKind::Stderr, r)
                }
                else => break,
            };

            match result? {
                0 => self.close(kind),
                n => {
                    let buf = match kind {
                        StreamKind::Stdout => &out_buf,
                        StreamKind::Stderr => &err_buf,
                    };
                    capture.record(kind, &buf[..n]);
                }
            }
        }

        Ok(capture)
    }

    fn close(&mut self, kind: StreamKind) {
        // Dropping the AsyncFd deregisters and closes the descriptor.
        match kind {
            StreamKind::Stdout => self.stdout = None,
            StreamKind::Stderr => self.stderr = None,
        }
    }
}

fn register(fd: OwnedFd) -> io::Result<AsyncFd<OwnedFd>> {
    nbio::set_non_blocking(&fd)?;
    AsyncFd::new(fd)
}

/// Read one chunk once the pipe is readable. Pends forever on a closed pipe.
async fn read_chunk(fd: Option<&AsyncFd<OwnedFd>>, buf: &mut [u8]) -> io::Result<usize> {
    let Some(fd) = fd else {
        return std::future::pending().await;
    };
    loop {
        let mut guard = fd.readable().await?;
        match nbio::read(fd.get_ref(), buf)? {
            Some(n) => return Ok(n),
            None => guard.clear_ready(),
        }
    }
}

#[cfg(test)]
#[path = "demux_tests.rs"]
mod tests;
