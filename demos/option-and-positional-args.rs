// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

/// An example showing how to handle options accepting multiple values,
/// flags and trailing positional arguments.
use argmatch::{ArgMatcher, OptSpec, Result};

fn main() -> Result<()> {
    pretty_env_logger::init();

    let args = ArgMatcher::from_env();

    let verbose = OptSpec::new('v').long("verbose");
    let input = OptSpec::new('i').long("input");
    let output = OptSpec::new('o').long("output");

    let verbosity = args.count_presence(&verbose);

    println!("INFO: verbosity level: {}", verbosity);

    // Support "--input <file> [<file>..]"
    let mut inputs: Vec<String> = Vec::new();
    let count = args.try_parse_many(&input, &mut inputs)?;

    println!("INFO: {} input file(s): {:?}", count, inputs);

    let mut outputs: Vec<String> = Vec::new();
    args.copy_end_args(&mut outputs)?;

    // With "-o <file> <posn>..", the value of the option is
    // collected too.
    if args.is_last_argument(&output) && !outputs.is_empty() {
        let file = outputs.remove(0);

        println!("INFO: output file: {:?}", file);
    }

    println!("INFO: positional arguments: {:?}", outputs);

    Ok(())
}
