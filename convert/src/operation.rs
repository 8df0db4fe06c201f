//! Run-time selection of a conversion by name, as used by the test
//! runner.
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Serialize, Serializer};

use super::error::UnknownOperation;
use super::mapping::DigitMapping;
use super::signed::SignedEncoding;

/// One of the six conversions the crate provides.  The two variants
/// differ in the kind of operand they take: a digit sequence for the
/// mapping conversions and a 32-bit integer for the signed encoders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Mapping(DigitMapping),
    Encoding(SignedEncoding),
}

/// The kind of operand an [`Operation`] takes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand {
    Digits,
    Integer,
}

impl Operation {
    pub const ALL: [Operation; 6] = [
        Operation::Mapping(DigitMapping::OctToBin),
        Operation::Mapping(DigitMapping::OctToHex),
        Operation::Mapping(DigitMapping::HexToBin),
        Operation::Encoding(SignedEncoding::SignMagnitude),
        Operation::Encoding(SignedEncoding::OnesComplement),
        Operation::Encoding(SignedEncoding::TwosComplement),
    ];

    /// The name by which test files refer to this operation.
    pub const fn name(&self) -> &'static str {
        match self {
            Operation::Mapping(m) => m.name(),
            Operation::Encoding(e) => e.name(),
        }
    }

    pub const fn operand(&self) -> Operand {
        match self {
            Operation::Mapping(_) => Operand::Digits,
            Operation::Encoding(_) => Operand::Integer,
        }
    }
}

impl FromStr for Operation {
    type Err = UnknownOperation;

    /// Names are matched exactly (and so case-sensitively).
    fn from_str(s: &str) -> Result<Operation, UnknownOperation> {
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| UnknownOperation(s.to_string()))
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        f.write_str(self.name())
    }
}

/// Operations serialize as their name, as it appears in test files.
impl Serialize for Operation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl From<DigitMapping> for Operation {
    fn from(m: DigitMapping) -> Operation {
        Operation::Mapping(m)
    }
}

impl From<SignedEncoding> for Operation {
    fn from(e: SignedEncoding) -> Operation {
        Operation::Encoding(e)
    }
}
