//! Tables and helpers shared by the mapping conversions and the
//! signed encoders.

/// Width of the words produced by the signed encoders.
pub const WORD_BITS: usize = 32;

/// Bit group for each octal digit value, most significant bit first.
pub(crate) const OCTAL_TRIPLETS: [&str; 8] = [
    "000", "001", "010", "011", //
    "100", "101", "110", "111", //
];

/// Bit group for each hexadecimal digit value, most significant bit
/// first.
pub(crate) const HEX_NIBBLES: [&str; 16] = [
    "0000", "0001", "0010", "0011", //
    "0100", "0101", "0110", "0111", //
    "1000", "1001", "1010", "1011", //
    "1100", "1101", "1110", "1111", //
];

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Returns the upper-case hexadecimal digit for the bottom four bits
/// of `nibble`.
pub(crate) const fn hex_from_nibble(nibble: u8) -> char {
    HEX_DIGITS[(nibble & 0xF) as usize] as char
}

/// Appends the 32-character binary representation of `value` to
/// `out`, most significant bit first.
pub fn write_u32_bits(value: u32, out: &mut String) {
    out.reserve(WORD_BITS);
    for shift in (0..WORD_BITS).rev() {
        out.push(if (value >> shift) & 1 == 1 { '1' } else { '0' });
    }
}

/// Returns the 32-character binary representation of `value`, most
/// significant bit first.
pub fn u32_to_bits(value: u32) -> String {
    let mut result = String::with_capacity(WORD_BITS);
    write_u32_bits(value, &mut result);
    result
}
