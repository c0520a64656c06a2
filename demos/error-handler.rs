// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

/// An example showing how to deal with invalid or missing option values.
use argmatch::{ArgMatcher, Error, OptSpec};
use std::process::exit;

const DEFAULT_NUMBER: u32 = 42;

fn main() {
    pretty_env_logger::init();

    // The error is handled here, so don't show the standard diagnostic too.
    let args = ArgMatcher::from_env().quiet();

    let number = match args.try_parse(&OptSpec::new('n').long("number"), DEFAULT_NUMBER) {
        Ok(number) => number,
        Err(Error::MissingOptArg { option }) => {
            eprintln!("ERROR: please specify a number after '{}'", option);
            exit(1);
        }
        Err(Error::InvalidValue { option, value, .. }) => {
            eprintln!(
                "ERROR: '{}' needs a positive number, not {:?} (using {})",
                option, value, DEFAULT_NUMBER
            );
            DEFAULT_NUMBER
        }
        Err(e) => {
            eprintln!("ERROR: {}", e);
            exit(1);
        }
    };

    println!("INFO: number: {}", number);
}
