// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Build scripts are expected to panic on failure.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::io::Write;

fn main() {
    let out_dir = std::env::var("OUT_DIR").unwrap();
    let path = std::path::Path::new(&out_dir).join("env_names.rs");
    let mut f = std::fs::File::create(path).unwrap();

    let vars = [
        ("LEAKCHECK_VALGRIND", "LEAKCHECK_VALGRIND"),
        ("LEAKCHECK_CHUNK_SIZE", "LEAKCHECK_CHUNK_SIZE"),
        (
            "LEAKCHECK_STRICT_TOOL_STATUS",
            "LEAKCHECK_STRICT_TOOL_STATUS",
        ),
        ("LEAKCHECK_TRANSCRIPT", "LEAKCHECK_TRANSCRIPT"),
        ("LEAKCHECK_DEBUG", "LEAKCHECK_DEBUG"),
    ];

    for (const_name, env_name) in vars {
        writeln!(f, "pub const {const_name}: &str = \"{env_name}\";").unwrap();
    }

    println!("cargo:rerun-if-changed=build.rs");
}
