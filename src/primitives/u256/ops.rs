//! Arithmetic operations for `U256`
//!
//! This module implements the wrapping arithmetic of the 256-bit integer:
//! addition, two's-complement negation, subtraction, logical left shift and
//! multiplication.
//!
//! All operations are implemented explicitly on the fixed-size word array,
//! with:
//! - no heap allocation
//! - results reduced modulo 2²⁵⁶ without any overflow reporting
//! - operands taken by value and a new value returned
//!
//! The operator traits (`+`, `-`, unary `-`, `*`, `<<`) forward to the named
//! methods.

use crate::primitives::u256::U256;

use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Shl, ShlAssign, Sub, SubAssign};

impl U256 {
    /// Wrapping addition.
    ///
    /// Words are summed from the least significant upward in a 64-bit
    /// accumulator; the carry out of word 7 is dropped.
    pub fn wrapping_add(self, rhs: U256) -> U256 {
        let mut out = [0u32; 8];
        let mut carry = 0u64;

        for ((&a, &b), o) in self.0.iter().zip(rhs.0.iter()).zip(out.iter_mut()) {
            let sum = a as u64 + b as u64 + carry;
            *o = sum as u32;
            carry = sum >> 32;
        }

        U256(out)
    }

    /// Two's-complement negation, `2²⁵⁶ − self`.
    ///
    /// Every word is complemented and one is added with the carry rippling
    /// through all eight words. Negating zero yields zero.
    pub fn wrapping_neg(self) -> U256 {
        let mut out = [0u32; 8];
        let mut carry = 1u64;

        for (&a, o) in self.0.iter().zip(out.iter_mut()) {
            let sum = (!a) as u64 + carry;
            *o = sum as u32;
            carry = sum >> 32;
        }

        U256(out)
    }

    /// Wrapping subtraction, computed as `self + (−rhs)`.
    pub fn wrapping_sub(self, rhs: U256) -> U256 {
        self.wrapping_add(rhs.wrapping_neg())
    }

    /// Logical left shift by `shift` bits.
    ///
    /// Bits moved past bit 255 are discarded and the vacated low bits are
    /// zero.
    ///
    /// # Panics
    /// If `shift` is 256 or more.
    pub fn shl_bits(self, shift: u32) -> U256 {
        assert!(shift < U256::BITS, "shift amount out of range");

        let word_shift = (shift / 32) as usize;
        let bit_shift = shift % 32;

        let mut out = [0u32; 8];

        for i in word_shift..8 {
            let src = i - word_shift;

            out[i] = self.0[src] << bit_shift;

            // A 32-bit shift by 32 would overflow, hence the `bit_shift` guard.
            if src > 0 && bit_shift > 0 {
                out[i] |= self.0[src - 1] >> (32 - bit_shift);
            }
        }

        U256(out)
    }

    /// Logical left shift, returning `None` instead of panicking when
    /// `shift` is 256 or more.
    pub fn checked_shl_bits(self, shift: u32) -> Option<U256> {
        (shift < U256::BITS).then(|| self.shl_bits(shift))
    }

    /// Wrapping multiplication.
    ///
    /// For every set bit `i` of `rhs`, `self << i` is added into the
    /// product. This is a plain shift-and-add over all 256 bit positions,
    /// not a word-parallel schoolbook multiply. High bits are lost to the
    /// shifts, so the result is the product modulo 2²⁵⁶.
    pub fn wrapping_mul(self, rhs: U256) -> U256 {
        (0..U256::BITS)
            .filter(|&i| rhs.is_bit_set(i))
            .fold(U256::ZERO, |product, i| product.wrapping_add(self.shl_bits(i)))
    }
}

impl Add for U256 {
    type Output = U256;

    fn add(self, rhs: U256) -> Self::Output {
        self.wrapping_add(rhs)
    }
}

impl AddAssign for U256 {
    fn add_assign(&mut self, rhs: U256) {
        *self = self.wrapping_add(rhs);
    }
}

impl Neg for U256 {
    type Output = U256;

    fn neg(self) -> Self::Output {
        self.wrapping_neg()
    }
}

impl Sub for U256 {
    type Output = U256;

    fn sub(self, rhs: U256) -> Self::Output {
        self.wrapping_sub(rhs)
    }
}

impl SubAssign for U256 {
    fn sub_assign(&mut self, rhs: U256) {
        *self = self.wrapping_sub(rhs);
    }
}

impl Mul for U256 {
    type Output = U256;

    fn mul(self, rhs: U256) -> Self::Output {
        self.wrapping_mul(rhs)
    }
}

impl MulAssign for U256 {
    fn mul_assign(&mut self, rhs: U256) {
        *self = self.wrapping_mul(rhs);
    }
}

/// Logical left shift (`<<`). Panics if the shift is 256 or more.
impl Shl<u32> for U256 {
    type Output = U256;

    fn shl(self, rhs: u32) -> Self::Output {
        self.shl_bits(rhs)
    }
}

impl ShlAssign<u32> for U256 {
    fn shl_assign(&mut self, rhs: u32) {
        *self = self.shl_bits(rhs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carry_ripples_across_every_word() {
        let low_ones = U256([u32::MAX, u32::MAX, u32::MAX, 0, 0, 0, 0, 0]);
        let sum = low_ones.wrapping_add(U256::ONE);

        assert_eq!(sum.0, [0, 0, 0, 1, 0, 0, 0, 0]);
    }

    #[test]
    fn negate_zero_is_zero() {
        assert_eq!(U256::ZERO.wrapping_neg(), U256::ZERO);
    }

    #[test]
    fn negate_one_is_max() {
        assert_eq!(U256::ONE.wrapping_neg(), U256::MAX);
    }

    #[test]
    fn shift_by_whole_words_moves_words() {
        let v = U256([1, 2, 3, 4, 5, 6, 7, 8]);

        assert_eq!(v.shl_bits(64).0, [0, 0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(v.shl_bits(224).0, [0, 0, 0, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn shift_carries_bits_into_next_word() {
        let v = U256([0x8000_0001, 0, 0, 0, 0, 0, 0, 0]);

        assert_eq!(v.shl_bits(1).0, [2, 1, 0, 0, 0, 0, 0, 0]);
        assert_eq!(v.shl_bits(33).0, [0, 2, 1, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn shift_discards_high_bits() {
        assert_eq!(U256::MAX.shl_bits(255).0, [0, 0, 0, 0, 0, 0, 0, 0x8000_0000]);
        assert_eq!(U256::MAX.shl_bits(0), U256::MAX);
    }

    #[test]
    #[should_panic(expected = "shift amount out of range")]
    fn shift_of_256_panics() {
        let _ = U256::ONE.shl_bits(256);
    }

    #[test]
    fn checked_shift_rejects_256() {
        assert_eq!(U256::ONE.checked_shl_bits(256), None);
        assert_eq!(U256::ONE.checked_shl_bits(4), Some(U256::from_u32(16)));
    }

    #[test]
    fn assign_operators_match_binary_ones() {
        let mut v = U256::from_u32(7);

        v += U256::from_u32(3);
        v *= U256::from_u32(4);
        v -= U256::ONE;
        v <<= 4;

        assert_eq!(v, U256::from_u32(39 << 4));
    }
}
