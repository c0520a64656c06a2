// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::env;
use std::fmt;

use log::debug;

use crate::convert::FromArg;
use crate::error::{Error, Result};

const OPT_PREFIX: char = '-';
const LONG_OPT_PREFIX: &str = "--";

/// Used to specify whether a scan is looking for a "stand-alone" flag
/// option (needs no value), or an option that requires an option argument.
#[derive(Debug, PartialEq, PartialOrd, Eq, Ord, Clone, Copy)]
enum Need {
    /// Option is stand-alone (no argument required).
    ///
    /// Flags may be bundled (`-abc`).
    Nothing,
    /// Option needs an argument.
    ///
    /// Only a stand-alone option (`-a`, `--all`) can take an argument.
    Argument,
}

impl Default for Need {
    fn default() -> Self {
        Need::Nothing
    }
}

/// The names an option can be specified with on the command-line.
///
/// Both names are optional: an absent name simply never matches.
#[derive(Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct OptSpec {
    /// Single character short option name (`-v`).
    short: Option<char>,
    /// Long option name without the leading dashes (`--verbose`).
    long: Option<String>,
}

impl OptSpec {
    /// Create an option with the specified short name.
    pub fn new(short: char) -> Self {
        OptSpec {
            short: Some(short),
            long: None,
        }
    }

    /// Create an option that only has a long name.
    pub fn long_only(long: &str) -> Self {
        OptSpec::default().long(long)
    }

    /// Specify the long name for the option.
    ///
    /// The name may be given with or without the leading `--`.
    /// An empty name means the option has no long form.
    pub fn long(self, long: &str) -> Self {
        let long = long.strip_prefix(LONG_OPT_PREFIX).unwrap_or(long);

        let long = match long.is_empty() {
            true => None,
            false => Some(long.into()),
        };

        OptSpec { long, ..self }
    }

    /// The short option name, if any.
    pub fn short_name(&self) -> Option<char> {
        self.short
    }

    /// The long option name (without the leading dashes), if any.
    pub fn long_name(&self) -> Option<&str> {
        self.long.as_deref()
    }

    fn matches_short(&self, token: &str) -> bool {
        let short = match self.short {
            Some(c) => c,
            None => return false,
        };

        let mut chars = token.chars();

        chars.next() == Some(OPT_PREFIX) && chars.next() == Some(short) && chars.next().is_none()
    }

    fn matches_long(&self, token: &str) -> bool {
        match &self.long {
            Some(long) => token.strip_prefix(LONG_OPT_PREFIX) == Some(long.as_str()),
            None => false,
        }
    }

    /// Returns true if the token is exactly this option (`-v` or `--verbose`).
    fn matches(&self, token: &str) -> bool {
        self.matches_short(token) || self.matches_long(token)
    }

    /// Returns the number of times the short name appears in a short
    /// option token (`-v` gives 1, `-vav` gives 2). Long option tokens are
    /// never decomposed.
    fn bundled_count(&self, token: &str) -> usize {
        let short = match self.short {
            Some(c) => c,
            None => return 0,
        };

        if !is_option(token) || token.starts_with(LONG_OPT_PREFIX) {
            return 0;
        }

        token.chars().skip(1).filter(|c| *c == short).count()
    }
}

impl From<char> for OptSpec {
    fn from(short: char) -> Self {
        OptSpec::new(short)
    }
}

impl fmt::Display for OptSpec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (self.short, &self.long) {
            (Some(short), Some(long)) => write!(
                f,
                "{}{}/{}{}",
                OPT_PREFIX, short, LONG_OPT_PREFIX, long
            ),
            (Some(short), None) => write!(f, "{}{}", OPT_PREFIX, short),
            (None, Some(long)) => write!(f, "{}{}", LONG_OPT_PREFIX, long),
            (None, None) => write!(f, "<unnamed>"),
        }
    }
}

/// Settings used to control the matchers behaviour.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialOrd, Default, PartialEq)]
pub struct Settings {
    /// If set, don't write a diagnostic to stderr when a query fails
    /// (the error is still returned to the caller).
    quiet: bool,
}

impl Settings {
    /// Create a new settings object.
    pub fn new() -> Self {
        Settings::default()
    }

    /// Specify that failed queries should not write a diagnostic
    /// message to stderr.
    pub fn quiet(self) -> Self {
        Settings { quiet: true, ..self }
    }
}

/// Returns true if the token looks like an option (starts with a dash).
fn is_option(token: &str) -> bool {
    token.starts_with(OPT_PREFIX)
}

/// Result of scanning the arguments for an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    /// Option found; the value is at the specified index.
    Value(usize),
    /// Option found (no value required).
    Flag,
    /// Option found at the specified index, but it was the last argument
    /// so the required value is missing.
    Missing(usize),
    /// Option not specified.
    NotPresent,
}

/// Answers queries about a fixed list of command-line arguments.
///
/// The first argument is the program name: it is never considered to be an
/// option or a value.
///
/// Every query scans the arguments afresh: no state is shared between
/// queries and the arguments are never modified, so queries can be made in
/// any order, any number of times, from any number of threads.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ArgMatcher {
    args: Vec<String>,
    settings: Settings,
}

impl ArgMatcher {
    /// Create a matcher for the specified arguments
    /// (which must include the program name).
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ArgMatcher {
            args: args.into_iter().map(Into::into).collect(),
            settings: Settings::default(),
        }
    }

    /// Create a matcher for the arguments the program was started with.
    pub fn from_env() -> Self {
        ArgMatcher::new(env::args())
    }

    /// Specify any settings for the matcher.
    pub fn settings(self, settings: Settings) -> Self {
        ArgMatcher { settings, ..self }
    }

    /// Don't write diagnostics to stderr.
    ///
    /// # Note
    ///
    /// This is an alternative to calling the `settings()` method.
    pub fn quiet(self) -> Self {
        ArgMatcher {
            settings: self.settings.quiet(),
            ..self
        }
    }

    /// All the arguments, including the program name.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// The program name (the first argument).
    pub fn program_name(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }

    /// Find the first occurrence of the option.
    ///
    /// If the option needs a value, only a stand-alone option token
    /// matches. Otherwise the option may also be part of a bundle of
    /// short options.
    fn scan(&self, opt: &OptSpec, need: Need) -> Outcome {
        for (i, arg) in self.args.iter().enumerate().skip(1) {
            if !is_option(arg) {
                continue;
            }

            if opt.matches(arg) {
                debug!("option {} matched {:?} at index {}", opt, arg, i);

                if need == Need::Nothing {
                    return Outcome::Flag;
                }

                let value = i + 1;

                if value >= self.args.len() {
                    return Outcome::Missing(i);
                }

                return Outcome::Value(value);
            }

            if need == Need::Nothing && opt.bundled_count(arg) > 0 {
                debug!("option {} found in bundle {:?} at index {}", opt, arg, i);

                return Outcome::Flag;
            }
        }

        Outcome::NotPresent
    }

    /// Format the diagnostic message for an error.
    fn diagnostic(&self, err: &Error) -> String {
        match self.program_name() {
            Some(name) => format!("{}: {}", name, err),
            None => err.to_string(),
        }
    }

    /// Write a diagnostic for the error (unless quiet) and return it.
    fn report(&self, err: Error) -> Error {
        if !self.settings.quiet {
            eprintln!("{}", self.diagnostic(&err));
        }

        err
    }

    fn convert<T: FromArg>(&self, option: &str, value: &str) -> Result<T> {
        T::from_arg(value).ok_or_else(|| {
            self.report(Error::InvalidValue {
                option: option.into(),
                value: value.into(),
                kind: T::KIND,
            })
        })
    }

    /// Returns true if the option was specified, either on its own
    /// (`-v`, `--verbose`) or as part of a bundle of short options (`-xvz`).
    ///
    /// Long option tokens are never searched for short options: `--verbose`
    /// does not imply `-v`.
    pub fn is_present(&self, opt: &OptSpec) -> bool {
        self.scan(opt, Need::Nothing) == Outcome::Flag
    }

    /// Returns the number of times the option was specified.
    ///
    /// Each occurrence of the short name counts, whether stand-alone or
    /// bundled, so `-vvv` and `-v -v -v` both give 3.
    pub fn count_presence(&self, opt: &OptSpec) -> usize {
        self.args
            .iter()
            .skip(1)
            .filter(|arg| is_option(arg))
            .map(|arg| match opt.matches_long(arg) {
                true => 1,
                false => opt.bundled_count(arg),
            })
            .sum()
    }

    /// Get the value of an option that requires a single value.
    ///
    /// Returns `Ok(None)` if the option was not specified. Only the first
    /// stand-alone occurrence of the option is considered; the argument
    /// following it is the value, even if it starts with a dash.
    ///
    /// # Errors
    ///
    /// - [Error::MissingOptArg] if the option is the last argument.
    /// - [Error::InvalidValue] if the value cannot be converted.
    pub fn get<T: FromArg>(&self, opt: &OptSpec) -> Result<Option<T>> {
        match self.scan(opt, Need::Argument) {
            Outcome::Value(i) => {
                let value = self.convert(&self.args[i - 1], &self.args[i])?;

                Ok(Some(value))
            }
            Outcome::Missing(i) => Err(self.report(Error::MissingOptArg {
                option: self.args[i].clone(),
            })),
            Outcome::Flag | Outcome::NotPresent => Ok(None),
        }
    }

    /// Get the value of an option that requires a single value,
    /// returning `default` if the option was not specified.
    ///
    /// An error is never replaced by the default: see [ArgMatcher::get()].
    pub fn try_parse<T: FromArg>(&self, opt: &OptSpec, default: T) -> Result<T> {
        Ok(self.get(opt)?.unwrap_or(default))
    }

    /// Like [ArgMatcher::try_parse()], but using the default value of
    /// the type.
    pub fn try_parse_or_default<T: FromArg + Default>(&self, opt: &OptSpec) -> Result<T> {
        Ok(self.get(opt)?.unwrap_or_default())
    }

    /// Get all the values of an option that accepts multiple values
    /// (`--input one two three`), appending them to `values`.
    ///
    /// Values are consumed until the end of the arguments or the next
    /// argument starting with a dash. Returns the number of values appended,
    /// which is zero if the option was not specified or is immediately
    /// followed by another option.
    ///
    /// # Errors
    ///
    /// - [Error::MissingOptArg] if the option is the last argument.
    /// - [Error::InvalidValue] if any value cannot be converted, in which
    ///   case `values` is left unchanged.
    pub fn try_parse_many<T: FromArg>(&self, opt: &OptSpec, values: &mut Vec<T>) -> Result<usize> {
        let first = match self.scan(opt, Need::Argument) {
            Outcome::Value(i) => i,
            Outcome::Missing(i) => {
                return Err(self.report(Error::MissingOptArg {
                    option: self.args[i].clone(),
                }))
            }
            Outcome::Flag | Outcome::NotPresent => return Ok(0),
        };

        let option = &self.args[first - 1];

        let found = self.args[first..]
            .iter()
            .take_while(|arg| !is_option(arg))
            .map(|arg| self.convert(option, arg))
            .collect::<Result<Vec<T>>>()?;

        debug!("option {} has {} value(s)", opt, found.len());

        let count = found.len();
        values.extend(found);

        Ok(count)
    }

    /// Copy the trailing positional arguments (those following the last
    /// argument that starts with a dash) to `values`.
    ///
    /// Returns the number of values appended (zero if the last argument is
    /// an option).
    ///
    /// # Notes
    ///
    /// The value of an option that requires one is indistinguishable from a
    /// positional argument here: for `-i input out1 out2` all three
    /// non-option arguments are copied. Use [ArgMatcher::is_last_argument()]
    /// to detect this situation.
    ///
    /// # Errors
    ///
    /// - [Error::InvalidPositional] if any argument cannot be converted, in
    ///   which case `values` is left unchanged.
    pub fn copy_end_args<T: FromArg>(&self, values: &mut Vec<T>) -> Result<usize> {
        let start = match self.args.iter().skip(1).rposition(|arg| is_option(arg)) {
            // Index relative to the second argument, plus one to skip the option.
            Some(i) => i + 2,
            None => 1,
        };

        if start >= self.args.len() {
            return Ok(0);
        }

        let found = self.args[start..]
            .iter()
            .map(|arg| {
                T::from_arg(arg).ok_or_else(|| {
                    self.report(Error::InvalidPositional {
                        value: arg.clone(),
                        kind: T::KIND,
                    })
                })
            })
            .collect::<Result<Vec<T>>>()?;

        debug!("{} trailing argument(s) from index {}", found.len(), start);

        let count = found.len();
        values.extend(found);

        Ok(count)
    }

    /// Returns true if the specified option is the last option
    /// specified (ignoring any positional arguments that follow it).
    ///
    /// Only stand-alone options are considered.
    pub fn is_last_argument(&self, opt: &OptSpec) -> bool {
        self.args
            .iter()
            .skip(1)
            .rev()
            .find(|arg| is_option(arg))
            .map_or(false, |arg| opt.matches(arg))
    }
}
