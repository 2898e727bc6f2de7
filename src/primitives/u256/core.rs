//! 256-bit unsigned integer primitive
//!
//! This module defines the fixed-size 256-bit unsigned integer type (`U256`)
//! together with its constants and read-only inspection helpers.
//!
//! It is designed as a **simple, explicit value type**, not as a full
//! big-integer arithmetic library. Values are `Copy`, live on the stack and
//! are never mutated in place by the arithmetic in this crate: every
//! operation consumes its operands by value and returns a fresh `U256`.
//!
//! The internal representation is eight 32-bit words in **little-endian word
//! order**: word 0 holds the least significant 32 bits, word 7 the most
//! significant.

use super::error::WordIndexError;

/// Fixed-size 256-bit unsigned integer.
///
/// The value is `Σ words[i] · 2^(32·i)` for `i` in `0..8`. All arithmetic is
/// performed modulo 2²⁵⁶.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct U256(pub(crate) [u32; 8]);

impl U256 {
    /// Number of bits in the integer.
    pub const BITS: u32 = 256;

    /// Number of 32-bit words in the representation.
    pub const WORDS: usize = 8;

    /// The value zero.
    pub const ZERO: Self = Self([0u32; 8]);

    /// The value one.
    pub const ONE: Self = Self::from_u32(1);

    /// The maximum representable value (2²⁵⁶ − 1).
    pub const MAX: Self = Self([u32::MAX; 8]);

    /// Creates a value whose least significant word is `value`.
    ///
    /// The upper 224 bits are zero.
    pub const fn from_u32(value: u32) -> Self {
        let mut words = [0u32; 8];
        words[0] = value;
        U256(words)
    }

    /// Creates a value from eight words, copied verbatim.
    ///
    /// `words[0]` is the least significant word and `words[7]` the most
    /// significant.
    pub const fn from_words(words: [u32; 8]) -> Self {
        U256(words)
    }

    /// Returns a copy of the eight words, least significant first.
    pub const fn words(self) -> [u32; 8] {
        self.0
    }

    /// Returns the raw 32-bit word at `index`.
    ///
    /// Index 0 is the least significant word and index 7 the most
    /// significant.
    ///
    /// # Errors
    /// Returns [`WordIndexError`] if `index` is not in `0..8`.
    pub fn word(self, index: usize) -> Result<u32, WordIndexError> {
        self.0
            .get(index)
            .copied()
            .ok_or(WordIndexError { index })
    }

    /// Returns `true` if the bit at `index` is set.
    ///
    /// Bit `i` lives in word `i / 32` at offset `i % 32`. Indices of 256 or
    /// more are outside the value and always report `false`.
    pub const fn is_bit_set(self, index: u32) -> bool {
        if index >= Self::BITS {
            return false;
        }

        let word = self.0[(index / 32) as usize];
        word & (1u32 << (index % 32)) != 0
    }

    /// Returns `true` if every bit is zero.
    pub fn is_zero(self) -> bool {
        self.0.iter().all(|&w| w == 0)
    }

    /// Counts the number of leading zero bits in the integer.
    ///
    /// Scans from the most significant word and returns the number of zero
    /// bits before the first set bit, in the range `0..=256`.
    pub fn leading_zeros(self) -> u32 {
        let mut count = 0u32;

        for &word in self.0.iter().rev() {
            if word == 0 {
                count += 32;
            } else {
                count += word.leading_zeros();
                return count;
            }
        }

        count
    }

    /// Minimum number of bits needed to represent the value.
    ///
    /// Zero needs no bits.
    pub fn bits(self) -> u32 {
        Self::BITS - self.leading_zeros()
    }
}
