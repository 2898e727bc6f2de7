//! Primitive types
//!
//! This module defines the fixed-size integer primitive of the crate.
//!
//! Primitives are simple, fixed-size building blocks with well-defined
//! semantics and predictable behavior. They intentionally do not attempt to
//! replicate full standard library abstractions or full-featured
//! big-integer libraries.
//!
//! Current primitives:
//! - `U256`: a fixed-size 256-bit unsigned integer with wrapping arithmetic

mod u256;

/// Fixed-size unsigned integer primitive and its error types.
pub use u256::{ParseHexError, TryFromU256Error, U256, WordIndexError};
