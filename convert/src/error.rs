//! Basic error reporting.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

use serde::Serialize;

/// The radix of a digit sequence accepted by one of the mapping
/// conversions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Radix {
    Octal,
    Hexadecimal,
}

impl Radix {
    pub(crate) const fn base(&self) -> u32 {
        match self {
            Radix::Octal => 8,
            Radix::Hexadecimal => 16,
        }
    }
}

impl Display for Radix {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            Radix::Octal => f.write_str("octal"),
            Radix::Hexadecimal => f.write_str("hexadecimal"),
        }
    }
}

/// Represents a failure of one of the strict mapping conversions:
/// the input contained a character which is not a digit in the
/// expected radix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct InvalidDigit {
    /// The radix the input was supposed to be written in.
    pub radix: Radix,
    /// Zero-based character (not byte) position of the offending
    /// character.
    pub position: usize,
    pub ch: char,
}

impl Error for InvalidDigit {}

impl Display for InvalidDigit {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        write!(
            f,
            "{:?} at position {} is not a valid {} digit",
            self.ch, self.position, self.radix
        )
    }
}

/// Signals that a name does not correspond to any of the known
/// conversions (see [`crate::Operation`]).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownOperation(pub String);

impl Error for UnknownOperation {}

impl Display for UnknownOperation {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "unknown function {:?}", self.0)
    }
}

#[test]
fn test_invalid_digit_display() {
    let e = InvalidDigit {
        radix: Radix::Octal,
        position: 2,
        ch: '9',
    };
    assert_eq!(e.to_string(), "'9' at position 2 is not a valid octal digit");
}

#[test]
fn test_unknown_operation_display() {
    assert_eq!(
        UnknownOperation("oct_to_dec".to_string()).to_string(),
        "unknown function \"oct_to_dec\""
    );
}
