//! Conversions between `U256` and 64-bit integers

use super::ensure_fits;
use crate::primitives::U256;
use crate::primitives::u256::error::TryFromU256Error;

/// Attempts to convert a `U256` into a `u64`.
///
/// Fails if any bit above bit 63 is set.
impl TryFrom<U256> for u64 {
    type Error = TryFromU256Error;

    fn try_from(value: U256) -> Result<Self, Self::Error> {
        ensure_fits(value, u64::BITS)?;

        Ok((value.0[0] as u64) | ((value.0[1] as u64) << 32))
    }
}

/// Converts a `u64` into a `U256`.
///
/// The low half lands in word 0 and the high half in word 1.
impl From<u64> for U256 {
    fn from(value: u64) -> Self {
        let mut words = [0u32; 8];
        words[0] = value as u32;
        words[1] = (value >> 32) as u32;

        U256(words)
    }
}
