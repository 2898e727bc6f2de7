//! Error types for `U256`
//!
//! Only the recoverable failure paths have an error type. Arithmetic never
//! fails: overflow and underflow wrap modulo 2²⁵⁶.

/// Errors produced by the strict hexadecimal parser.
///
/// The lenient parser ([`U256::from_hex`](super::U256::from_hex)) never
/// fails; it exists for compatibility with best-effort inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseHexError {
    /// The input contained no characters.
    #[error("cannot parse a 256-bit integer from an empty string")]
    Empty,
    /// A byte outside `0-9`, `a-f` and `A-F` was found.
    #[error("invalid hex digit {byte:#04x} at index {index}")]
    InvalidDigit { byte: u8, index: usize },
    /// The value needs more than 64 hex digits.
    #[error("{digits} significant hex digits do not fit in 256 bits")]
    Overflow { digits: usize },
}

/// A word index outside `0..8` was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("word index {index} out of range, expected 0..8")]
pub struct WordIndexError {
    pub index: usize,
}

/// A narrowing conversion would discard set bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("value needs {needed} bits and does not fit in u{width}")]
pub struct TryFromU256Error {
    /// Bits required to represent the value.
    pub needed: u32,
    /// Width of the target integer type.
    pub width: u32,
}
