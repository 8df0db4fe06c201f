//! The `convert` crate implements conversions between textual radix
//! representations (octal, hexadecimal and binary) and the three
//! classic 32-bit signed binary representations (sign-magnitude,
//! one's complement and two's complement).
//!
//! Every conversion is a pure function; none of them performs I/O or
//! keeps state between calls.  The permissive conversions never fail,
//! even on input containing characters which are not digits in the
//! relevant base.  Each mapping conversion also has a `_strict`
//! counterpart which rejects such input instead.

mod bits;
mod mapping;
mod operation;
mod signed;

pub mod error;
pub mod prelude;

pub use crate::bits::{u32_to_bits, write_u32_bits, WORD_BITS};
pub use crate::mapping::*;
pub use crate::operation::{Operand, Operation};
pub use crate::signed::*;

#[test]
fn test_mapping_examples() {
    assert_eq!(oct_to_bin("725"), "111010101");
    assert_eq!(oct_to_hex("725"), "1D5");
    assert_eq!(hex_to_bin("A3"), "10100011");
}

#[test]
fn test_signed_examples() {
    assert_eq!(to_sign_magnitude(-5), "10000000000000000000000000000101");
    assert_eq!(to_ones_complement(-5), "11111111111111111111111111111010");
    assert_eq!(to_twos_complement(-5), "11111111111111111111111111111011");
}
