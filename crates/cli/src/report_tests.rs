// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use crate::classify::classify;
use rstest::rstest;

fn clean() -> Verdict {
    Verdict::Clean { reports: vec![] }
}

fn leaked() -> Verdict {
    classify("definitely lost: 40 bytes in 1 blocks\n")
}

#[rstest]
#[case(clean(), 0, false, Outcome::Success)]
#[case(clean(), 0, true, Outcome::Success)]
#[case(clean(), 1, false, Outcome::Success)]
#[case(clean(), 139, false, Outcome::Success)]
#[case(clean(), 1, true, Outcome::ToolFailed { status: 1 })]
#[case(clean(), 139, true, Outcome::ToolFailed { status: 139 })]
#[case(leaked(), 0, false, Outcome::LeakDetected)]
#[case(leaked(), 1, true, Outcome::LeakDetected)]
#[case(Verdict::Malformed { count: 1 }, 0, false, Outcome::MalformedOutput)]
#[case(Verdict::Malformed { count: 4 }, 1, true, Outcome::MalformedOutput)]
fn resolve_outcome(
    #[case] verdict: Verdict,
    #[case] status: i32,
    #[case] strict: bool,
    #[case] expected: Outcome,
) {
    assert_eq!(Outcome::resolve(&verdict, status, strict), expected);
}

#[rstest]
#[case(Outcome::Success, 0, StreamKind::Stdout)]
#[case(Outcome::LeakDetected, 1, StreamKind::Stderr)]
#[case(Outcome::MalformedOutput, 1, StreamKind::Stderr)]
#[case(Outcome::ToolFailed { status: 2 }, 1, StreamKind::Stderr)]
fn exit_code_and_stream(
    #[case] outcome: Outcome,
    #[case] code: i32,
    #[case] stream: StreamKind,
) {
    assert_eq!(outcome.exit_code(), code);
    assert_eq!(outcome.stream(), stream);
}

#[test]
fn banners_match_expected_text() {
    assert_eq!(
        Outcome::Success.banner(),
        "\n\n#### Valgrind found no definite or indirect memory leaks.\n"
    );
    assert_eq!(
        Outcome::LeakDetected.banner(),
        "\n\n#### Valgrind found memory leaks.\n#### Exiting.\n"
    );
    assert_eq!(
        Outcome::MalformedOutput.banner(),
        "\n\n#### Malformed Valgrind output.\n#### Exiting.\n"
    );
    assert_eq!(
        Outcome::ToolFailed { status: 3 }.banner(),
        "\n\n#### Valgrind exited with status 3.\n#### Exiting.\n"
    );
}

#[rstest]
#[case(
    "** VALGRIND_ROOT=/opt/vg\n** line two\n** line three\nprogram output\n",
    "program output\n"
)]
#[case("** VALGRIND_ROOT=/opt/vg\n** two\n** three\n", "")]
#[case("** VALGRIND_ROOT=/opt/vg\n** two\n", "")]
#[case("program output\n** VALGRIND_ROOT=/opt/vg\n", "program output\n** VALGRIND_ROOT=/opt/vg\n")]
#[case(" ** VALGRIND_ROOT=/opt/vg\na\nb\nc\n", " ** VALGRIND_ROOT=/opt/vg\na\nb\nc\n")]
#[case("", "")]
fn banner_stripping(#[case] stdout: &str, #[case] expected: &str) {
    assert_eq!(strip_banner(stdout.as_bytes()), expected.as_bytes());
}

#[test]
fn echo_writes_each_stream_verbatim() {
    let mut capture = Capture::new();
    capture.record(StreamKind::Stdout, b"out ");
    capture.record(StreamKind::Stderr, b"==1== definitely lo");
    capture.record(StreamKind::Stdout, b"more\n");
    capture.record(StreamKind::Stderr, b"st: 0 bytes in 0 blocks\n");

    let mut out = Vec::new();
    let mut err = Vec::new();
    echo(&capture, &mut out, &mut err).unwrap();

    assert_eq!(out, b"out more\n");
    assert_eq!(err, b"==1== definitely lost: 0 bytes in 0 blocks\n");
}

#[test]
fn echo_strips_banner_from_stdout_only() {
    let mut capture = Capture::new();
    capture.record(StreamKind::Stdout, b"** VALGRIND_ROOT=/x\n1\n2\nkept\n");
    capture.record(StreamKind::Stderr, b"** VALGRIND_ROOT=/x\n1\n2\n");

    let mut out = Vec::new();
    let mut err = Vec::new();
    echo(&capture, &mut out, &mut err).unwrap();

    assert_eq!(out, b"kept\n");
    assert_eq!(err, b"** VALGRIND_ROOT=/x\n1\n2\n");
}

#[rstest]
#[case(Outcome::Success, true)]
#[case(Outcome::LeakDetected, false)]
#[case(Outcome::MalformedOutput, false)]
fn announce_picks_stream(#[case] outcome: Outcome, #[case] on_stdout: bool) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    announce(outcome, &mut out, &mut err).unwrap();

    let (written, silent) = if on_stdout { (out, err) } else { (err, out) };
    assert_eq!(String::from_utf8(written).unwrap(), outcome.banner());
    assert!(silent.is_empty());
}
