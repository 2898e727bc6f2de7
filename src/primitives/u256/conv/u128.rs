//! Conversions between `U256` and 128-bit integer representations
//!
//! A `u128` covers words 0 through 3 of the 256-bit value.

use super::ensure_fits;
use crate::primitives::U256;
use crate::primitives::u256::error::TryFromU256Error;

/// Attempts to convert a `U256` into a `u128`.
///
/// The conversion succeeds only if the upper 128 bits of the value are zero.
impl TryFrom<U256> for u128 {
    type Error = TryFromU256Error;

    fn try_from(value: U256) -> Result<Self, Self::Error> {
        ensure_fits(value, u128::BITS)?;

        Ok(value.0[..4]
            .iter()
            .rev()
            .fold(0u128, |acc, &w| (acc << 32) | w as u128))
    }
}

/// Converts a `u128` into a `U256`.
///
/// The value is placed in the least significant 128 bits, with the upper
/// words set to zero.
impl From<u128> for U256 {
    fn from(value: u128) -> Self {
        let mut words = [0u32; 8];

        for (i, w) in words.iter_mut().take(4).enumerate() {
            *w = (value >> (32 * i)) as u32;
        }

        U256(words)
    }
}
