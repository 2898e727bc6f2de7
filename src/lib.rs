//! Fixed-width 256-bit unsigned integer arithmetic
//!
//! This crate provides `U256`, a 256-bit unsigned integer stored as eight
//! 32-bit words, and the small closed set of operations defined on it.
//!
//! The focus is on **clarity, predictability, and auditability** rather
//! than speed: multiplication, for instance, is a plain shift-and-add over
//! the 256 bits of the multiplier.
//!
//! # Module overview
//!
//! - `primitives`
//!   The `U256` value type together with:
//!   - construction from `u32`, word arrays, byte arrays and hex strings
//!     (a lenient parser that never fails and a strict one that does)
//!   - minimal lowercase hex formatting and the `fmt` hex traits
//!   - word access and bit inspection
//!   - wrapping addition, two's-complement negation, subtraction, logical
//!     left shift and multiplication, also exposed as operator traits
//!
//! # Semantics
//!
//! - All arithmetic is modulo 2²⁵⁶; overflow and underflow wrap silently
//! - Values are `Copy` and immutable; every operation returns a new value
//! - The only panicking operation is a left shift by 256 bits or more
//!
//! ```
//! use uint256::primitives::U256;
//!
//! let a = U256::from_u32(5);
//! let b = U256::from_u32(3);
//!
//! assert_eq!((a + b).to_hex(), "8");
//! assert_eq!((a - b).to_hex(), "2");
//! assert_eq!((a * b).to_hex(), "f");
//! ```
//!
//! # Non-goals
//!
//! Division, comparison, bitwise logic, right shifts and signed
//! interpretation are not provided.

pub mod primitives;
