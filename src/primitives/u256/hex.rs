//! Hexadecimal parsing and formatting for `U256`
//!
//! Two parsers are provided:
//! - [`U256::from_hex`], a lenient best-effort parser that never fails
//! - [`U256::try_from_hex`] (also reachable through `str::parse`), a strict
//!   parser that rejects anything that is not a well-formed hex number
//!
//! Formatting always produces the minimal representation: no leading zeros,
//! no prefix, and `"0"` for zero.

use super::U256;
use super::error::ParseHexError;

use std::fmt;
use std::str::FromStr;

/// Maximum number of hex digits in a 256-bit value.
const MAX_DIGITS: usize = 64;

const LOWER: &[u8; 16] = b"0123456789abcdef";
const UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Decodes a single ASCII hex digit.
fn nibble_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

impl U256 {
    /// Parses a string of hex digits, best effort.
    ///
    /// The input is read as raw bytes, without a `0x` prefix or sign:
    /// - `"0"` and the empty string yield zero
    /// - only the last 64 bytes are consumed; anything before them is
    ///   discarded
    /// - the last byte is the least significant nibble, and each byte
    ///   further left moves four bits up
    /// - bytes that are not hex digits contribute nothing, but they still
    ///   occupy their nibble position, so `"1g1"` parses as `0x101`
    ///
    /// This never fails. Use [`U256::try_from_hex`] to reject malformed
    /// input instead.
    pub fn from_hex(hex: &str) -> Self {
        let bytes = hex.as_bytes();

        if bytes == b"0" {
            return U256::ZERO;
        }

        let consumed = &bytes[bytes.len().saturating_sub(MAX_DIGITS)..];
        let mut words = [0u32; 8];

        for (pos, &byte) in consumed.iter().rev().enumerate() {
            let Some(nibble) = nibble_value(byte) else {
                continue;
            };

            words[pos / 8] |= (nibble as u32) << ((pos % 8) * 4);
        }

        U256(words)
    }

    /// Parses a string of hex digits, rejecting malformed input.
    ///
    /// Digits are case-insensitive and there is no `0x` prefix. Leading
    /// zeros are allowed in any number; only the significant digits must
    /// fit in 64.
    ///
    /// # Errors
    /// - [`ParseHexError::Empty`] for an empty string
    /// - [`ParseHexError::InvalidDigit`] for the first byte that is not a
    ///   hex digit
    /// - [`ParseHexError::Overflow`] if more than 64 significant digits remain
    pub fn try_from_hex(hex: &str) -> Result<Self, ParseHexError> {
        let bytes = hex.as_bytes();

        if bytes.is_empty() {
            return Err(ParseHexError::Empty);
        }

        if let Some((index, &byte)) = bytes
            .iter()
            .enumerate()
            .find(|&(_, &b)| nibble_value(b).is_none())
        {
            return Err(ParseHexError::InvalidDigit { byte, index });
        }

        let digits = bytes.iter().skip_while(|&&b| b == b'0').count();
        if digits > MAX_DIGITS {
            return Err(ParseHexError::Overflow { digits });
        }

        // All bytes are ASCII at this point, so any offset is a char boundary.
        Ok(Self::from_hex(&hex[hex.len() - digits..]))
    }

    /// Formats the value as minimal lowercase hex.
    ///
    /// Zero formats as `"0"`; every other value starts with its most
    /// significant non-zero nibble. The result is at most 64 characters.
    pub fn to_hex(self) -> String {
        let mut buf = [0u8; MAX_DIGITS];
        let len = self.encode(LOWER, &mut buf);

        buf[..len].iter().map(|&b| b as char).collect()
    }

    /// All 64 nibbles, most significant first.
    fn nibbles(self) -> impl Iterator<Item = u8> {
        (0..MAX_DIGITS)
            .rev()
            .map(move |pos| ((self.0[pos / 8] >> ((pos % 8) * 4)) & 0xF) as u8)
    }

    /// Writes the minimal digit string into `buf` and returns its length.
    fn encode(self, alphabet: &[u8; 16], buf: &mut [u8; MAX_DIGITS]) -> usize {
        let mut len = 0;

        for nibble in self.nibbles().skip_while(|&n| n == 0) {
            buf[len] = alphabet[nibble as usize];
            len += 1;
        }

        if len == 0 {
            buf[0] = b'0';
            len = 1;
        }

        len
    }

    fn fmt_with(self, alphabet: &[u8; 16], f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0u8; MAX_DIGITS];
        let len = self.encode(alphabet, &mut buf);
        let digits = std::str::from_utf8(&buf[..len]).map_err(|_| fmt::Error)?;

        f.pad_integral(true, "0x", digits)
    }
}

/// Minimal lowercase hex. `{:#x}` prepends `0x`; width and fill are honored.
impl fmt::LowerHex for U256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_with(LOWER, f)
    }
}

/// Minimal uppercase hex. `{:#X}` prepends `0x`.
impl fmt::UpperHex for U256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_with(UPPER, f)
    }
}

/// Formats the value as minimal lowercase hex, like [`U256::to_hex`].
impl fmt::Display for U256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

/// Strict parsing, see [`U256::try_from_hex`].
impl FromStr for U256 {
    type Err = ParseHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        U256::try_from_hex(s)
    }
}
