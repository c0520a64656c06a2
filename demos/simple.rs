// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

/// A simple example showing how to populate a configuration from the
/// command-line.
use argmatch::{ArgMatcher, OptSpec, Result};

/// The configuration for this program.
#[derive(Clone, Debug, PartialEq)]
struct Config {
    verbose: bool,
    number: i32,
    input_file: String,
    output_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            verbose: false,
            number: 42,
            input_file: "input.file".into(),
            output_file: "output.file".into(),
        }
    }
}

fn show_help(config: &Config) {
    let verbose = match config.verbose {
        true => "on",
        false => "off",
    };

    println!("USAGE:");
    println!("    -h/--help      Show this help");
    println!("    -v             Set app to verbose (default: {})", verbose);
    println!("    -n/--number    Define 'number' (default: {})", config.number);
    println!(
        "    -i/--input     Input filename (default: {})",
        config.input_file
    );
    println!(
        "    -o/--output    Output filename (default: {})",
        config.output_file
    );
}

fn parse_config(args: &ArgMatcher) -> Result<Config> {
    let default = Config::default();

    let config = Config {
        verbose: args.is_present(&OptSpec::new('v')),
        number: args.try_parse(&OptSpec::new('n').long("number"), default.number)?,
        input_file: args.try_parse(&OptSpec::new('i').long("input"), default.input_file)?,
        output_file: args.try_parse(&OptSpec::new('o').long("output"), default.output_file)?,
    };

    Ok(config)
}

fn main() -> Result<()> {
    pretty_env_logger::init();

    let args = ArgMatcher::from_env();

    if args.is_present(&OptSpec::new('h').long("help")) {
        show_help(&Config::default());
        return Ok(());
    }

    let config = parse_config(&args)?;

    println!("INFO: config: {:?}", config);

    Ok(())
}
