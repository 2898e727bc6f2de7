//! 256-bit unsigned integer primitive
//!
//! This module defines the `U256` type, a fixed-size 256-bit unsigned
//! integer stored as eight 32-bit words.
//!
//! `U256` is designed as a low-level, dependency-light primitive rather than
//! a full big-integer abstraction. It provides:
//! - construction from native integers, word arrays, byte arrays and hex
//! - minimal lowercase hex formatting
//! - word and bit inspection
//! - wrapping addition, negation, subtraction, left shift and
//!   multiplication
//!
//! All arithmetic wraps modulo 2²⁵⁶ and never reports overflow.

mod conv;
mod core;
mod error;
mod hex;
mod ops;

/// Fixed-size 256-bit unsigned integer.
pub use self::core::U256;

pub use error::{ParseHexError, TryFromU256Error, WordIndexError};
