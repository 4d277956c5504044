// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use rstest::rstest;

#[test]
fn default_launches_valgrind() {
    let config = Config::default();
    assert_eq!(config.program, OsString::from("valgrind"));
    assert_eq!(config.chunk_size, 10_000);
    assert!(!config.strict_tool_status);
    assert!(config.transcript.is_none());
    assert!(!config.debug);
}

#[rstest]
#[case("1", 1)]
#[case("4096", 4096)]
#[case(" 10000\n", 10_000)]
fn chunk_size_parses(#[case] raw: &str, #[case] expected: usize) {
    assert_eq!(parse_chunk_size(raw), Ok(expected));
}

#[rstest]
#[case("")]
#[case("0")]
#[case("-5")]
#[case("ten")]
#[case("1.5")]
fn chunk_size_rejects(#[case] raw: &str) {
    assert_eq!(
        parse_chunk_size(raw),
        Err(ConfigError::InvalidChunkSize(raw.to_string()))
    );
}

#[test]
fn chunk_size_error_names_value() {
    let err = parse_chunk_size("ten").unwrap_err();
    assert_eq!(
        err.to_string(),
        r#"invalid chunk size "ten": expected a positive integer"#
    );
}
