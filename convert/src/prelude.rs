//! The prelude exports the conversion functions together with the
//! types used to describe and dispatch them.  Providing this prelude
//! is a convenience for callers (such as the test runner) which use
//! most of the crate.
pub use super::error::*;
pub use super::mapping::*;
pub use super::operation::{Operand, Operation};
pub use super::signed::*;
pub use super::{u32_to_bits, write_u32_bits, WORD_BITS};
