//! Fixed-width (32-bit) signed binary representations.
//!
//! Each encoder has two forms: one returning the encoded word as a
//! `u32` bit pattern (e.g. [`sign_magnitude_bits`]) and one returning
//! it as a 32-character string of `0` and `1`, most significant bit
//! first (e.g. [`to_sign_magnitude`]).  All of them are defined for
//! every `i32`.
use std::fmt::{self, Display, Formatter};

use super::bits::u32_to_bits;


const SIGN_BIT: u32 = 1 << 31;
const VALUE_BITS: u32 = SIGN_BIT - 1;

/// Returns the sign-magnitude encoding of `n`: the top bit is the
/// sign and the remaining 31 bits are the magnitude.
///
/// The magnitude of `i32::MIN` needs 32 bits, so it cannot be
/// represented.  For that value the result has the sign bit set and a
/// zero magnitude, which is also the encoding of "negative zero".
pub const fn sign_magnitude_bits(n: i32) -> u32 {
    if n >= 0 {
        n as u32
    } else if n == i32::MIN {
        SIGN_BIT
    } else {
        SIGN_BIT | (n.unsigned_abs() & VALUE_BITS)
    }
}

/// Returns the one's complement encoding of `n`: non-negative values
/// are unchanged and negative values are the bitwise inverse of their
/// magnitude.
///
/// The magnitude of `i32::MIN` (2³¹) fits in 32 unsigned bits, so its
/// encoding is `0x7FFF_FFFF`.  That is also the encoding of
/// `i32::MAX`; the word is too narrow to tell them apart.
pub const fn ones_complement_bits(n: i32) -> u32 {
    if n >= 0 {
        n as u32
    } else {
        !n.unsigned_abs()
    }
}

/// Returns the two's complement encoding of `n`, which is simply the
/// machine representation of `n`.
pub const fn twos_complement_bits(n: i32) -> u32 {
    n as u32
}

/// Returns the 32-bit sign-magnitude encoding of `n` as a string.
/// See [`sign_magnitude_bits`] for the treatment of `i32::MIN`.
pub fn to_sign_magnitude(n: i32) -> String {
    u32_to_bits(sign_magnitude_bits(n))
}

/// Returns the 32-bit one's complement encoding of `n` as a string.
pub fn to_ones_complement(n: i32) -> String {
    u32_to_bits(ones_complement_bits(n))
}

/// Returns the 32-bit two's complement encoding of `n` as a string.
pub fn to_twos_complement(n: i32) -> String {
    u32_to_bits(twos_complement_bits(n))
}

/// The signed encoders, for callers which select an encoding at run
/// time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SignedEncoding {
    SignMagnitude,
    OnesComplement,
    TwosComplement,
}

impl SignedEncoding {
    pub const ALL: [SignedEncoding; 3] = [
        SignedEncoding::SignMagnitude,
        SignedEncoding::OnesComplement,
        SignedEncoding::TwosComplement,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            SignedEncoding::SignMagnitude => "to_sign_magnitude",
            SignedEncoding::OnesComplement => "to_ones_complement",
            SignedEncoding::TwosComplement => "to_twos_complement",
        }
    }

    pub const fn bits(&self, n: i32) -> u32 {
        match self {
            SignedEncoding::SignMagnitude => sign_magnitude_bits(n),
            SignedEncoding::OnesComplement => ones_complement_bits(n),
            SignedEncoding::TwosComplement => twos_complement_bits(n),
        }
    }

    pub fn encode(&self, n: i32) -> String {
        u32_to_bits(self.bits(n))
    }
}

impl Display for SignedEncoding {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        f.write_str(self.name())
    }
}
