//! Direct-mapping conversions.  Each input digit maps independently
//! onto a fixed-width group of bits; there is never a carry between
//! digits.
//!
//! The permissive conversions accept any input.  Characters which are
//! not octal digits are dropped by [`oct_to_bin`] (and therefore by
//! [`oct_to_hex`]), while characters which are not hexadecimal digits
//! are converted by [`hex_to_bin`] as if they were `0`.  Existing test
//! vectors depend on this difference, so it is kept.
use std::fmt::{self, Display, Formatter};
use std::str::Chars;

use super::bits::{hex_from_nibble, HEX_NIBBLES, OCTAL_TRIPLETS};
use super::error::{InvalidDigit, Radix};

#[cfg(test)]
mod tests;

fn octal_digits(oct: &str) -> impl Iterator<Item = usize> + '_ {
    oct.chars()
        .filter_map(|ch| ch.to_digit(8))
        .map(|d| d as usize)
}

/// Appends the binary representation of the octal digits in `oct` to
/// `out`, three bits per digit.  Characters other than `0`..`7` are
/// skipped.
pub fn oct_to_bin_into(oct: &str, out: &mut String) {
    out.reserve(oct.len() * 3);
    for digit in octal_digits(oct) {
        out.push_str(OCTAL_TRIPLETS[digit]);
    }
}

/// Converts a sequence of octal digits to binary, three bits per
/// digit (so `"725"` becomes `"111010101"`).  Characters other than
/// `0`..`7` are skipped.
pub fn oct_to_bin(oct: &str) -> String {
    let mut result = String::with_capacity(oct.len() * 3);
    oct_to_bin_into(oct, &mut result);
    result
}

/// Appends the binary representation of the hexadecimal digits in
/// `hex` to `out`, four bits per character.  Digits are
/// case-insensitive and any other character contributes `0000`.
pub fn hex_to_bin_into(hex: &str, out: &mut String) {
    out.reserve(hex.len() * 4);
    for ch in hex.chars() {
        let nibble = ch.to_digit(16).unwrap_or(0);
        out.push_str(HEX_NIBBLES[nibble as usize]);
    }
}

/// Converts a sequence of hexadecimal digits to binary, four bits per
/// character (so both `"a3"` and `"A3"` become `"10100011"`).  Any
/// character which is not a hexadecimal digit converts to `0000`.
pub fn hex_to_bin(hex: &str) -> String {
    let mut result = String::with_capacity(hex.len() * 4);
    hex_to_bin_into(hex, &mut result);
    result
}

/// Appends the upper-case hexadecimal equivalent of the octal digits
/// in `oct` to `out`.
///
/// The octal digits are expanded to bits, padded on the left to a
/// whole number of nibbles and regrouped four bits at a time.
/// Leading zero digits are not emitted, but a zero value (including
/// the empty input) is written as `0`.
pub fn oct_to_hex_into(oct: &str, out: &mut String) {
    let bits = oct_to_bin(oct);
    // Left-padding only adds leading zero bits, which do not change
    // the value of the first nibble; so we start the first nibble
    // part-way through instead of materialising the padding.
    let mut filled: usize = (4 - bits.len() % 4) % 4;
    let mut nibble: u8 = 0;
    let mut emitted = false;
    for bit in bits.bytes() {
        nibble = (nibble << 1) | u8::from(bit == b'1');
        filled += 1;
        if filled == 4 {
            if emitted || nibble != 0 {
                out.push(hex_from_nibble(nibble));
                emitted = true;
            }
            nibble = 0;
            filled = 0;
        }
    }
    if !emitted {
        out.push('0');
    }
}

/// Converts a sequence of octal digits to upper-case hexadecimal
/// without leading zeroes (so `"725"` becomes `"1D5"`).  The result
/// is never empty; zero (and empty input) gives `"0"`.  Characters
/// other than `0`..`7` are skipped.
pub fn oct_to_hex(oct: &str) -> String {
    let mut result = String::with_capacity(oct.len());
    oct_to_hex_into(oct, &mut result);
    result
}

fn check_digits(chars: Chars<'_>, radix: Radix) -> Result<(), InvalidDigit> {
    match chars
        .enumerate()
        .find(|(_, ch)| ch.to_digit(radix.base()).is_none())
    {
        Some((position, ch)) => Err(InvalidDigit {
            radix,
            position,
            ch,
        }),
        None => Ok(()),
    }
}

/// Like [`oct_to_bin`], but fails on the first character which is not
/// an octal digit.
pub fn oct_to_bin_strict(oct: &str) -> Result<String, InvalidDigit> {
    check_digits(oct.chars(), Radix::Octal)?;
    Ok(oct_to_bin(oct))
}

/// Like [`oct_to_hex`], but fails on the first character which is not
/// an octal digit.
pub fn oct_to_hex_strict(oct: &str) -> Result<String, InvalidDigit> {
    check_digits(oct.chars(), Radix::Octal)?;
    Ok(oct_to_hex(oct))
}

/// Like [`hex_to_bin`], but fails on the first character which is not
/// a hexadecimal digit.
pub fn hex_to_bin_strict(hex: &str) -> Result<String, InvalidDigit> {
    check_digits(hex.chars(), Radix::Hexadecimal)?;
    Ok(hex_to_bin(hex))
}

/// The direct-mapping conversions, for callers which select a
/// conversion at run time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DigitMapping {
    OctToBin,
    OctToHex,
    HexToBin,
}

impl DigitMapping {
    pub const ALL: [DigitMapping; 3] = [
        DigitMapping::OctToBin,
        DigitMapping::OctToHex,
        DigitMapping::HexToBin,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            DigitMapping::OctToBin => "oct_to_bin",
            DigitMapping::OctToHex => "oct_to_hex",
            DigitMapping::HexToBin => "hex_to_bin",
        }
    }

    /// The radix in which the input is expected to be written.
    pub const fn input_radix(&self) -> Radix {
        match self {
            DigitMapping::OctToBin | DigitMapping::OctToHex => Radix::Octal,
            DigitMapping::HexToBin => Radix::Hexadecimal,
        }
    }

    pub fn apply(&self, digits: &str) -> String {
        match self {
            DigitMapping::OctToBin => oct_to_bin(digits),
            DigitMapping::OctToHex => oct_to_hex(digits),
            DigitMapping::HexToBin => hex_to_bin(digits),
        }
    }

    pub fn apply_strict(&self, digits: &str) -> Result<String, InvalidDigit> {
        match self {
            DigitMapping::OctToBin => oct_to_bin_strict(digits),
            DigitMapping::OctToHex => oct_to_hex_strict(digits),
            DigitMapping::HexToBin => hex_to_bin_strict(digits),
        }
    }
}

impl Display for DigitMapping {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        f.write_str(self.name())
    }
}
