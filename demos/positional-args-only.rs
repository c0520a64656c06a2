// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

/// An example showing how to collect trailing positional arguments.
use argmatch::{ArgMatcher, Result};

fn main() -> Result<()> {
    pretty_env_logger::init();

    let args = ArgMatcher::from_env();

    let mut files: Vec<String> = Vec::new();

    let count = args.copy_end_args(&mut files)?;

    println!("INFO: found {} positional argument(s)", count);

    for (i, file) in files.iter().enumerate() {
        println!("INFO: argument {}: {:?}", i, file);
    }

    Ok(())
}
