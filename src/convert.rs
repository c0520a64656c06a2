// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::fmt;

/// The kinds of value a command-line argument can be converted into.
#[derive(Debug, PartialEq, PartialOrd, Eq, Ord, Clone, Copy, Hash)]
pub enum Kind {
    /// Any string, taken verbatim.
    Text,
    /// `1`, `true`, `TRUE`, `0`, `false` or `FALSE`.
    Boolean,
    /// A signed or unsigned integer.
    Integer,
    /// A floating-point number.
    Float,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Kind::Text => "text",
            Kind::Boolean => "boolean",
            Kind::Integer => "integer",
            Kind::Float => "floating-point",
        };

        write!(f, "{}", name)
    }
}

mod private {
    pub trait Sealed {}
}

/// Types that a command-line argument can be converted into.
///
/// The set of types is closed: the trait is implemented for [String],
/// [bool] and the primitive integer and floating-point types, and cannot
/// be implemented outside this crate.
pub trait FromArg: Sized + private::Sealed {
    /// The kind of value this type represents.
    const KIND: Kind;

    /// Convert the argument, returning [None] if it is not a valid
    /// representation of the type.
    fn from_arg(arg: &str) -> Option<Self>;
}

impl private::Sealed for String {}

impl FromArg for String {
    const KIND: Kind = Kind::Text;

    fn from_arg(arg: &str) -> Option<Self> {
        Some(arg.into())
    }
}

impl private::Sealed for bool {}

impl FromArg for bool {
    const KIND: Kind = Kind::Boolean;

    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "1" | "true" | "TRUE" => Some(true),
            "0" | "false" | "FALSE" => Some(false),
            _ => None,
        }
    }
}

// The whole argument must be consumed, and unlike `str::parse()`, an
// explicit plus sign is not accepted.
macro_rules! numeric_from_arg {
    ($kind:expr, $($t:ty),+) => {
        $(
            impl private::Sealed for $t {}

            impl FromArg for $t {
                const KIND: Kind = $kind;

                fn from_arg(arg: &str) -> Option<Self> {
                    if arg.starts_with('+') {
                        return None;
                    }

                    arg.parse().ok()
                }
            }
        )+
    };
}

numeric_from_arg!(
    Kind::Integer,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize
);

numeric_from_arg!(Kind::Float, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind() {
        assert_eq!(<String as FromArg>::KIND, Kind::Text);
        assert_eq!(<bool as FromArg>::KIND, Kind::Boolean);
        assert_eq!(<u8 as FromArg>::KIND, Kind::Integer);
        assert_eq!(<i128 as FromArg>::KIND, Kind::Integer);
        assert_eq!(<usize as FromArg>::KIND, Kind::Integer);
        assert_eq!(<f32 as FromArg>::KIND, Kind::Float);
        assert_eq!(<f64 as FromArg>::KIND, Kind::Float);

        assert_eq!(Kind::Text.to_string(), "text");
        assert_eq!(Kind::Float.to_string(), "floating-point");
    }

    #[test]
    fn test_string() {
        for arg in &["", "foo", "-d", "--", "hello world", "人"] {
            assert_eq!(String::from_arg(arg), Some(arg.to_string()));
        }
    }

    #[test]
    fn test_bool() {
        #[derive(Debug)]
        struct TestData<'a> {
            arg: &'a str,
            result: Option<bool>,
        }

        let tests = &[
            TestData {
                arg: "1",
                result: Some(true),
            },
            TestData {
                arg: "true",
                result: Some(true),
            },
            TestData {
                arg: "TRUE",
                result: Some(true),
            },
            TestData {
                arg: "0",
                result: Some(false),
            },
            TestData {
                arg: "false",
                result: Some(false),
            },
            TestData {
                arg: "FALSE",
                result: Some(false),
            },
            //------------------------------
            TestData {
                arg: "",
                result: None,
            },
            TestData {
                arg: "True",
                result: None,
            },
            TestData {
                arg: "yes",
                result: None,
            },
            TestData {
                arg: "2",
                result: None,
            },
            TestData {
                arg: " true",
                result: None,
            },
        ];

        for (i, d) in tests.iter().enumerate() {
            let msg = format!("test[{}]: {:?}", i, d);

            let result = bool::from_arg(d.arg);

            assert_eq!(result, d.result, "{}", msg);
        }
    }

    #[test]
    fn test_integer() {
        #[derive(Debug)]
        struct TestData<'a> {
            arg: &'a str,
            result: Option<i32>,
        }

        let tests = &[
            TestData {
                arg: "0",
                result: Some(0),
            },
            TestData {
                arg: "45",
                result: Some(45),
            },
            TestData {
                arg: "-45",
                result: Some(-45),
            },
            TestData {
                arg: "2147483647",
                result: Some(i32::MAX),
            },
            TestData {
                arg: "-2147483648",
                result: Some(i32::MIN),
            },
            //------------------------------
            TestData {
                arg: "",
                result: None,
            },
            TestData {
                arg: "-",
                result: None,
            },
            TestData {
                arg: "+45",
                result: None,
            },
            TestData {
                arg: "45abc",
                result: None,
            },
            TestData {
                arg: "abc",
                result: None,
            },
            TestData {
                arg: "4 5",
                result: None,
            },
            TestData {
                arg: "12.3",
                result: None,
            },
            TestData {
                arg: "2147483648",
                result: None,
            },
        ];

        for (i, d) in tests.iter().enumerate() {
            let msg = format!("test[{}]: {:?}", i, d);

            let result = i32::from_arg(d.arg);

            assert_eq!(result, d.result, "{}", msg);
        }

        assert_eq!(u8::from_arg("255"), Some(255));
        assert_eq!(u8::from_arg("256"), None);
        assert_eq!(u32::from_arg("-1"), None);
        assert_eq!(usize::from_arg("42"), Some(42));
    }

    #[test]
    fn test_float() {
        #[derive(Debug)]
        struct TestData<'a> {
            arg: &'a str,
            result: Option<f64>,
        }

        let tests = &[
            TestData {
                arg: "12.3",
                result: Some(12.3),
            },
            TestData {
                arg: "-12.3",
                result: Some(-12.3),
            },
            TestData {
                arg: "7",
                result: Some(7.0),
            },
            TestData {
                arg: "-6001.45e-2",
                result: Some(-60.0145),
            },
            TestData {
                arg: "1e3",
                result: Some(1000.0),
            },
            //------------------------------
            TestData {
                arg: "",
                result: None,
            },
            TestData {
                arg: "+1.5",
                result: None,
            },
            TestData {
                arg: "12.3f",
                result: None,
            },
            TestData {
                arg: "1.2.3",
                result: None,
            },
            TestData {
                arg: "twelve",
                result: None,
            },
        ];

        for (i, d) in tests.iter().enumerate() {
            let msg = format!("test[{}]: {:?}", i, d);

            let result = f64::from_arg(d.arg);

            assert_eq!(result, d.result, "{}", msg);
        }

        assert_eq!(f32::from_arg("0.5"), Some(0.5f32));
        assert!(f64::from_arg("nan").unwrap().is_nan());
        assert_eq!(f64::from_arg("inf"), Some(f64::INFINITY));
    }

    #[test]
    fn test_numeric_reconversion() {
        let ints = &["0", "1", "-1", "45", "-9223372036854775808", "9223372036854775807"];

        for (i, arg) in ints.iter().enumerate() {
            let value = i64::from_arg(arg).unwrap();
            let formatted = value.to_string();

            let msg = format!("test[{}]: arg: {:?}, formatted: {:?}", i, arg, formatted);

            assert_eq!(i64::from_arg(&formatted), Some(value), "{}", msg);
        }

        let floats = &["0", "12.3", "-67.8", "1e-7", "3.4028235e38", "0.1"];

        for (i, arg) in floats.iter().enumerate() {
            let value = f64::from_arg(arg).unwrap();
            let formatted = value.to_string();

            let msg = format!("test[{}]: arg: {:?}, formatted: {:?}", i, arg, formatted);

            assert_eq!(f64::from_arg(&formatted), Some(value), "{}", msg);
        }
    }
}
