// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Valgrind process launch.
//!
//! Builds the memcheck command line and spawns it with stdout and stderr on
//! pipes. Stdin and the environment are inherited.

use std::ffi::{OsStr, OsString};
use std::io;
use std::os::unix::process::ExitStatusExt;
use std::process::{Child, ChildStderr, ChildStdout, Command, ExitStatus, Stdio};

use thiserror::Error;

/// Default memory-checking tool.
pub const VALGRIND: &str = "valgrind";

/// Flags placed ahead of the forwarded arguments.
pub const VALGRIND_FLAGS: [&str; 5] = [
    "--error-exitcode=1",
    "--leak-check=full",
    "--trace-children=yes",
    // Used for implicit null checks.
    "--ignore-ranges=0x000-0xFFF",
    // Valgrind crashes with the default level (2).
    "--vex-iropt-level=1",
];

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("failed to launch {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
}

impl LaunchError {
    /// The operating-system error behind a failed spawn.
    pub fn io_error(&self) -> &io::Error {
        let LaunchError::Spawn { source, .. } = self;
        source
    }
}

/// A fully built tool command line. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToolCommand {
    program: OsString,
    args: Vec<OsString>,
}

impl ToolCommand {
    /// Prepend [`VALGRIND_FLAGS`] to `forwarded`, which is passed through
    /// untouched.
    pub fn new<I, S>(program: impl Into<OsString>, forwarded: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let args = VALGRIND_FLAGS
            .iter()
            .map(OsString::from)
            .chain(forwarded.into_iter().map(Into::into))
            .collect();
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn program(&self) -> &OsStr {
        &self.program
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Program followed by every argument.
    pub fn argv(&self) -> Vec<OsString> {
        std::iter::once(self.program.clone())
            .chain(self.args.iter().cloned())
            .collect()
    }

    /// Space-joined command line for diagnostics.
    pub fn display(&self) -> String {
        self.argv()
            .iter()
            .map(|arg| arg.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Start the tool with stdout and stderr redirected to pipes.
    pub fn spawn(&self) -> Result<(Launched, Pipes), LaunchError> {
        let spawn_error = |source: io::Error| LaunchError::Spawn {
            program: self.program.to_string_lossy().into_owned(),
            source,
        };
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(spawn_error)?;

        // Always set for `Stdio::piped()`.
        let (stdout, stderr) = child
            .stdout
            .take()
            .zip(child.stderr.take())
            .ok_or_else(|| spawn_error(io::Error::other("output pipes were not created")))?;
        Ok((Launched { child }, Pipes { stdout, stderr }))
    }
}

/// Read ends of the child's output pipes.
pub struct Pipes {
    pub stdout: ChildStdout,
    pub stderr: ChildStderr,
}

/// A running tool process.
pub struct Launched {
    child: Child,
}

impl Launched {
    pub fn id(&self) -> u32 {
        self.child.id()
    }

    /// Wait for the child process to exit and return exit code.
    pub async fn wait(self) -> io::Result<i32> {
        let mut child = self.child;
        let status = tokio::task::spawn_blocking(move || child.wait())
            .await
            .map_err(io::Error::other)??;
        Ok(exit_code(status))
    }

    /// Kill and reap the child. Used when capture fails part way.
    pub async fn abort(self) -> io::Result<i32> {
        let mut child = self.child;
        // Already exited is fine; wait() still reaps it.
        let _ = child.kill();
        Self { child }.wait().await
    }
}

/// Map an exit status to a shell-style exit code.
pub fn exit_code(status: ExitStatus) -> i32 {
    match (status.code(), status.signal()) {
        (Some(code), _) => code,
        (None, Some(sig)) => 128 + sig,
        (None, None) => 1,
    }
}

#[cfg(test)]
#[path = "launcher_tests.rs"]
mod tests;
