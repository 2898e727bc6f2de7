//! Conversions between `U256` and byte representations
//!
//! Bytes are the usual interchange format for 256-bit values (hash
//! outputs, keys, wire encodings). Both byte orders are supported
//! explicitly and there is no `From<[u8; 32]>`; callers always name the
//! byte order.

use crate::primitives::U256;

impl U256 {
    /// Creates a value from 32 bytes, least significant byte first.
    pub fn from_le_bytes(bytes: [u8; 32]) -> Self {
        let mut words = [0u32; 8];

        for (w, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
            *w = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }

        U256(words)
    }

    /// Creates a value from 32 bytes, most significant byte first.
    pub fn from_be_bytes(bytes: [u8; 32]) -> Self {
        let mut le = bytes;
        le.reverse();

        Self::from_le_bytes(le)
    }

    /// Returns the value as 32 bytes, least significant byte first.
    pub fn to_le_bytes(self) -> [u8; 32] {
        let mut out = [0u8; 32];

        for (chunk, w) in out.chunks_exact_mut(4).zip(self.0.iter()) {
            chunk.copy_from_slice(&w.to_le_bytes());
        }

        out
    }

    /// Returns the value as 32 bytes, most significant byte first.
    pub fn to_be_bytes(self) -> [u8; 32] {
        let mut out = self.to_le_bytes();
        out.reverse();

        out
    }
}

/// Converts a `u8` into a `U256`.
///
/// The value is placed in the least significant byte, with all higher
/// bits set to zero.
impl From<u8> for U256 {
    fn from(value: u8) -> Self {
        U256::from_u32(value as u32)
    }
}
