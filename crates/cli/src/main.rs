// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! leakcheck binary entry point.

use std::ffi::OsString;
use std::io;

use leakcheck::config::Config;
use leakcheck::output_diagnostic::print_error;
use leakcheck::report::exit_codes;
use leakcheck::run::run;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = Config::from_env();
    // Every argument belongs to valgrind; the wrapper takes none of its own.
    let forwarded: Vec<OsString> = std::env::args_os().skip(1).collect();

    let code = match run(&config, forwarded, &mut io::stdout(), &mut io::stderr()).await {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            print_error(&e);
            exit_codes::FAILURE
        }
    };
    std::process::exit(code);
}
