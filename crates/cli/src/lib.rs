// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Valgrind leak gate for CI.
//!
//! Runs `valgrind` with memcheck flags in front of the forwarded command
//! line, echoes everything it prints, and fails when the leak summary
//! reports definitely or indirectly lost bytes, or looks malformed.

pub mod classify;
pub mod config;
pub mod env;
pub mod launcher;
pub mod output_diagnostic;
pub mod report;
pub mod run;
