//! Integer conversion utilities
//!
//! This module groups explicit conversion implementations between the
//! fixed-size `U256` primitive and native integer and array types.
//!
//! Each submodule handles one width, following these principles:
//! - little-endian word order inside `U256`, explicit byte order at the
//!   edges (`from_le_bytes` / `from_be_bytes`)
//! - widening conversions are infallible `From` impls
//! - narrowing conversions are `TryFrom` impls that fail instead of
//!   truncating

use super::U256;
use super::error::TryFromU256Error;

mod u128;
mod u16;
mod u32;
mod u64;
mod u8;

/// Checks that `value` fits in an unsigned integer of `width` bits.
fn ensure_fits(value: U256, width: u32) -> Result<(), TryFromU256Error> {
    let needed = value.bits();

    if needed > width {
        return Err(TryFromU256Error { needed, width });
    }

    Ok(())
}
