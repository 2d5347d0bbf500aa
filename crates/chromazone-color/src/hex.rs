//! Hex color notation

use crate::error::{ColorError, ColorResult};
use chromazone_core::Rgba;

/// Parse `#rgb`, `#rrggbb`, or the same without the leading `#`.
///
/// The short form doubles each digit (`#f0a` is `#ff00aa`). The result is
/// always opaque.
///
/// # Errors
///
/// Returns [`ColorError::InvalidHex`] for any other length or a non-hex
/// digit.
pub fn parse_hex(s: &str) -> ColorResult<Rgba> {
    let digits = s.strip_prefix('#').unwrap_or(s);
    let invalid = || ColorError::InvalidHex(s.to_string());

    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let nibble = |i: usize| -> ColorResult<u8> {
        u8::from_str_radix(&digits[i..i + 1], 16).map_err(|_| invalid())
    };
    let byte = |i: usize| -> ColorResult<u8> {
        u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid())
    };

    match digits.len() {
        3 => Ok(Rgba::rgb(
            nibble(0)? * 17,
            nibble(1)? * 17,
            nibble(2)? * 17,
        )),
        6 => Ok(Rgba::rgb(byte(0)?, byte(2)?, byte(4)?)),
        _ => Err(invalid()),
    }
}
