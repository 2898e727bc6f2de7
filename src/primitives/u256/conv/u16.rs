//! Conversions between `U256` and 16-bit integers

use crate::primitives::U256;

/// Converts a `u16` into a `U256`, zero-extending it.
impl From<u16> for U256 {
    fn from(value: u16) -> Self {
        U256::from_u32(value as u32)
    }
}
