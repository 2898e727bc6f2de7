//! Conversions between `U256` and 32-bit integer representations
//!
//! The 32-bit word is the native unit of `U256`, so these conversions are
//! direct copies with no reordering.

use super::ensure_fits;
use crate::primitives::U256;
use crate::primitives::u256::error::TryFromU256Error;

/// Converts a `U256` into its eight 32-bit words.
///
/// The resulting array is ordered from least significant to most
/// significant word.
impl From<U256> for [u32; 8] {
    fn from(value: U256) -> Self {
        value.0
    }
}

/// Converts eight 32-bit words into a `U256`.
///
/// `value[0]` is the least significant word, `value[7]` the most
/// significant.
impl From<[u32; 8]> for U256 {
    fn from(value: [u32; 8]) -> Self {
        U256::from_words(value)
    }
}

/// Attempts to convert a `U256` into a `u32`.
///
/// The conversion succeeds only if the upper 224 bits of the value are zero.
impl TryFrom<U256> for u32 {
    type Error = TryFromU256Error;

    fn try_from(value: U256) -> Result<Self, Self::Error> {
        ensure_fits(value, u32::BITS)?;

        Ok(value.0[0])
    }
}

/// Converts a `u32` into a `U256`.
///
/// The value is placed in word 0, with all higher words set to zero.
impl From<u32> for U256 {
    fn from(value: u32) -> Self {
        U256::from_u32(value)
    }
}
