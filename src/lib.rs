// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

#![deny(missing_docs)]
#![forbid(unsafe_code)]

//! Simple crate for querying command-line arguments.
//!
//! If you want lots of extra features, you should consider the excellent
//! [`clap`](https://crates.io/crates/clap) crate instead.
//!
//! ---
//!
//! Table of contents:
//!
//! * [Overview](#overview)
//! * [Quickstart](#quickstart)
//! * [Examples](#examples)
//! * [Details](#details)
//! * [Terminology](#terminology)
//! * [Errors](#errors)
//! * [Limitations](#limitations)
//!
//! ---
//!
//! # Overview
//!
//! Rather than registering options up front and parsing the command-line
//! in one go, this crate lets a program _ask questions_ about its
//! arguments:
//!
//! - Was an option specified?
//! - How many times was it specified?
//! - What value (converted to a particular type) was given for it?
//! - What values were given for an option accepting multiple values?
//! - What positional arguments were specified at the end of the command line?
//!
//! Each question is answered by scanning the arguments afresh, so questions
//! can be asked in any order and as many times as required.
//!
//! # Quickstart
//!
//! 1. Create an [ArgMatcher] for the arguments of the program:
//!
//!    ```rust
//!    # use argmatch::ArgMatcher;
//!    #
//!    let args = ArgMatcher::from_env();
//!    ```
//!
//! 1. Describe each option with an [OptSpec]. As a minimum, an option has
//!    a single-character short name, and it may also have a long name:
//!
//!    ```rust
//!    # use argmatch::OptSpec;
//!    #
//!    // Support "-v" and "--verbose".
//!    let verbose = OptSpec::new('v').long("verbose");
//!
//!    // Support "--dry-run" only.
//!    let dry_run = OptSpec::long_only("dry-run");
//!    ```
//!
//! 1. Query the arguments:
//!
//!    ```rust
//!    # use argmatch::{ArgMatcher, OptSpec, Result};
//!    #
//!    # fn main() -> Result<()> {
//!    let args = ArgMatcher::new(vec!["prog", "-v", "-n", "3"]);
//!
//!    let verbose = args.is_present(&OptSpec::new('v').long("verbose"));
//!    let number = args.try_parse(&OptSpec::new('n').long("number"), 42)?;
//!
//!    assert!(verbose);
//!    assert_eq!(number, 3);
//!    #
//!    # Ok(())
//!    # }
//!    ```
//!
//! # Examples
//!
//! Below is a full example showing how a program can populate its
//! configuration from the command-line.
//!
//! ```rust
//! use argmatch::{ArgMatcher, OptSpec, Result};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Config {
//!     verbosity: usize,
//!     number: i32,
//!     input: String,
//!     ratio: f64,
//!     files: Vec<String>,
//! }
//!
//! impl Default for Config {
//!     fn default() -> Self {
//!         Config {
//!             verbosity: 0,
//!             number: 42,
//!             input: "input.file".into(),
//!             ratio: 0.5,
//!             files: Vec::new(),
//!         }
//!     }
//! }
//!
//! fn parse_config(args: &ArgMatcher) -> Result<Config> {
//!     let default = Config::default();
//!
//!     let mut files = Vec::new();
//!     args.copy_end_args(&mut files)?;
//!
//!     Ok(Config {
//!         verbosity: args.count_presence(&OptSpec::new('v').long("verbose")),
//!         number: args.try_parse(&OptSpec::new('n').long("number"), default.number)?,
//!         input: args.try_parse(&OptSpec::new('i').long("input"), default.input)?,
//!         ratio: args.try_parse(&OptSpec::long_only("ratio"), default.ratio)?,
//!         files,
//!     })
//! }
//!
//! fn main() -> Result<()> {
//!     let args = ArgMatcher::new(vec![
//!         "prog", "-vv", "--number", "7", "--verbose", "-x", "one", "two",
//!     ]);
//!
//!     let config = parse_config(&args)?;
//!
//!     assert_eq!(config.verbosity, 3);
//!     assert_eq!(config.number, 7);
//!     assert_eq!(config.input, "input.file");
//!     assert_eq!(config.ratio, 0.5);
//!     assert_eq!(config.files, vec!["one", "two"]);
//!
//!     Ok(())
//! }
//! ```
//!
//! For further examples, try out the programs in the `demos/` directory:
//!
//! ```bash
//! $ cargo run --example simple -- -v -n 7 --input foo
//! $ cargo run --example positional-args-only -- one two "hello world" three
//! $ cargo run --example option-and-positional-args -- -vv --input a b c -- one two
//! $ cargo run --example error-handler -- --number 12abc
//! ```
//!
//! # Details
//!
//! ## Terminology
//!
//! > **Note:** For further details, see `getopt(3)`.
//!
//! - An "argument" is a value passed to a program on the command-line.
//!
//!   The first argument is the name of the program. It is never considered
//!   to be an option or a value.
//!
//! - An "option" is an argument that starts with a dash character (`-`).
//!
//!   A "short option" is a dash followed by a single character (`-v`).
//!   A "long option" is two dashes followed by a name (`--verbose`).
//!
//! - Options that do not accept a value are called "flags".
//!
//!   Short flags can be "bundled": `-abc` is equivalent to `-a -b -c`.
//!   Long options are never bundled: `--abc` does _not_ imply `-a`.
//!
//! - An "option argument" (or "value") is the argument that immediately
//!   follows an option that needs one. Only a stand-alone option can take a
//!   value: in `-xn 3`, the `-n` is a flag and `3` is not its value.
//!
//!   The argument following a stand-alone option is its value, even if it
//!   starts with a dash (so `-n -5` works as expected).
//!
//! - A "positional argument" is an argument that is not an option.
//!
//!   The "trailing" positional arguments are those that follow the last
//!   option on the command-line (see [ArgMatcher::copy_end_args()]).
//!
//! ## Values
//!
//! Values can be converted to any type implementing [FromArg]:
//!
//! | Type | Accepted values |
//! |-|-|
//! | [String] | Anything. |
//! | [bool] | `1`, `true`, `TRUE`, `0`, `false`, `FALSE`. |
//! | Integers (`i8` to `u128`) | A complete decimal number with an optional leading `-`. |
//! | Floats (`f32`, `f64`) | A complete floating-point number, for example `12.3`, `-1e3`. |
//!
//! # Errors
//!
//! An option not being specified is not an error: the default value is
//! used, or nothing is returned. However:
//!
//! - If an option that needs a value is the last argument, [Error::MissingOptArg]
//!   is returned.
//! - If a value cannot be converted to the requested type,
//!   [Error::InvalidValue] (or [Error::InvalidPositional]) is returned.
//!
//! The default value is never returned in place of an error. In both cases a
//! single line diagnostic is also written to stderr (unless the matcher is
//! [quiet](ArgMatcher::quiet)). The crate never exits the program: it is up
//! to the caller to decide whether an error is fatal.
//!
//! ```rust
//! use argmatch::{ArgMatcher, Error, OptSpec};
//!
//! let args = ArgMatcher::new(vec!["prog", "-n"]).quiet();
//!
//! let result = args.try_parse(&OptSpec::new('n'), 42);
//!
//! assert_eq!(result, Err(Error::MissingOptArg { option: "-n".into() }));
//! ```
//!
//! # Limitations
//!
//! - Options and their values must be separated by whitespace.
//!
//!   **Example:** `-n 3` and `--number 3` are valid, but `-n3` and
//!   `--number=3` are not.
//!
//! - Only the first occurrence of an option that needs a value is considered.
//!
//! - An option that needs a value cannot be bundled with other options.
//!
//! - The special `--` argument is not treated as "end of options".
//!
//! - Positional arguments that are the value of the last option cannot be
//!   distinguished from trailing positional arguments, but this can be
//!   detected using [ArgMatcher::is_last_argument()].

mod args;
mod convert;
mod error;

pub use error::{Error, Result};

pub use args::{ArgMatcher, OptSpec, Settings};
pub use convert::{FromArg, Kind};
