// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Leak report classification.
//!
//! Scans Valgrind's stderr for "definitely lost" and "indirectly lost"
//! summary lines. Possibly-lost and still-reachable bytes are tolerated to
//! keep false positives down.
//!
//! ```text
//! ==4242== LEAK SUMMARY:
//! ==4242==    definitely lost: 0 bytes in 0 blocks
//! ==4242==    indirectly lost: 0 bytes in 0 blocks
//! ==4242==      possibly lost: 0 bytes in 0 blocks
//! ```

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Number of report lines a well-formed Valgrind run produces.
pub const KNOWN_REPORT_COUNTS: [usize; 3] = [0, 2, 3];

static LEAK_LINE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"(definitely|indirectly) lost:").expect("leak line regex is invalid")
});

static LEAK_OKAY: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"lost: 0 bytes in 0 blocks").expect("leak okay regex is invalid")
});

static LEAK_COUNTS: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"lost: ([\d,]+) bytes in ([\d,]+) blocks").expect("leak counts regex is invalid")
});

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeakKind {
    Definite,
    Indirect,
}

impl fmt::Display for LeakKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeakKind::Definite => f.write_str("definitely lost"),
            LeakKind::Indirect => f.write_str("indirectly lost"),
        }
    }
}

/// One "definitely lost" or "indirectly lost" line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeakReport {
    pub kind: LeakKind,
    /// The line as captured, without its terminator.
    pub line: String,
    /// Leaked bytes, when the line carries a readable count.
    pub bytes: Option<u64>,
    /// Leaked blocks, when the line carries a readable count.
    pub blocks: Option<u64>,
    zero: bool,
}

impl LeakReport {
    /// Parse a line, returning `None` unless it is a leak report line.
    pub fn parse(line: &str) -> Option<Self> {
        let marker = LEAK_LINE.captures(line)?;
        let kind = match marker.get(1).map(|m| m.as_str()) {
            Some("definitely") => LeakKind::Definite,
            _ => LeakKind::Indirect,
        };
        let counts = LEAK_COUNTS.captures(line);
        let count = |i: usize| counts.as_ref()?.get(i).and_then(|m| parse_count(m.as_str()));

        Some(Self {
            kind,
            line: line.to_string(),
            bytes: count(1),
            blocks: count(2),
            zero: LEAK_OKAY.is_match(line),
        })
    }

    /// Whether the line reports nothing lost.
    pub fn is_zero(&self) -> bool {
        self.zero
    }
}

/// Parse a Valgrind count such as `1,024`.
fn parse_count(raw: &str) -> Option<u64> {
    raw.replace(',', "").parse().ok()
}

/// Result of scanning a captured stderr.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Every report line was zero and the count was one of
    /// [`KNOWN_REPORT_COUNTS`].
    Clean { reports: Vec<LeakReport> },
    /// First report line with a non-zero count. Scanning stopped here.
    Leaked { report: LeakReport },
    /// All report lines were zero but there were an unexpected number.
    Malformed { count: usize },
}

impl Verdict {
    pub fn is_clean(&self) -> bool {
        matches!(self, Verdict::Clean { .. })
    }
}

/// Classify the complete stderr text of a Valgrind run.
///
/// `text` must be the concatenation of every chunk read, so that no line is
/// split at a read boundary.
pub fn classify(text: &str) -> Verdict {
    let mut reports = Vec::new();
    for report in text.lines().filter_map(LeakReport::parse) {
        if !report.is_zero() {
            return Verdict::Leaked { report };
        }
        reports.push(report);
    }

    if KNOWN_REPORT_COUNTS.contains(&reports.len()) {
        Verdict::Clean { reports }
    } else {
        Verdict::Malformed {
            count: reports.len(),
        }
    }
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
