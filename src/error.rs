// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use thiserror::Error;

use crate::convert::Kind;

/// The error type.
///
/// "Option not specified" is not an error: queries fall back to a default
/// value, or report that nothing was found.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum Error {
    /// An option that needs a value was the last argument
    /// on the command-line.
    #[error("missing value for option '{option}'")]
    MissingOptArg {
        /// The option as it was specified by the user.
        option: String,
    },

    /// The value following an option could not be converted
    /// to the requested type.
    #[error("invalid {kind} value {value:?} for option '{option}'")]
    InvalidValue {
        /// The option as it was specified by the user.
        option: String,
        /// The offending value.
        value: String,
        /// The kind of value that was expected.
        kind: Kind,
    },

    /// A trailing positional argument could not be converted
    /// to the requested type.
    #[error("invalid {kind} positional argument {value:?}")]
    InvalidPositional {
        /// The offending argument.
        value: String,
        /// The kind of value that was expected.
        kind: Kind,
    },
}

/// Convenience type that allows a function to be defined as returning a
/// [Result], but which only requires the success type to be specified,
/// defaulting the error type to this crates `Error` type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        #[derive(Debug)]
        struct TestData<'a> {
            error: Error,
            display: &'a str,
        }

        let tests = &[
            TestData {
                error: Error::MissingOptArg {
                    option: "-n".into(),
                },
                display: "missing value for option '-n'",
            },
            TestData {
                error: Error::InvalidValue {
                    option: "--number".into(),
                    value: "12abc".into(),
                    kind: Kind::Integer,
                },
                display: "invalid integer value \"12abc\" for option '--number'",
            },
            TestData {
                error: Error::InvalidValue {
                    option: "-b".into(),
                    value: "yes".into(),
                    kind: Kind::Boolean,
                },
                display: "invalid boolean value \"yes\" for option '-b'",
            },
            TestData {
                error: Error::InvalidPositional {
                    value: "one".into(),
                    kind: Kind::Float,
                },
                display: "invalid floating-point positional argument \"one\"",
            },
        ];

        for (i, d) in tests.iter().enumerate() {
            let value = d.error.to_string();

            let msg = format!("test[{}]: {:?}, value: {:?}", i, d, value);

            assert_eq!(value, d.display, "{}", msg);
        }
    }
}
