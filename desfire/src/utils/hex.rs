//! Hexadecimal helpers used for frame traces and display purposes.

use std::fmt::Write;

use crate::{Error, Result};

/// Convert a byte slice to an upper-case hex string without separators.
///
/// Example: `&[0xde, 0xad]` -> `"DEAD"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        // write! never fails writing to a String
        let _ = write!(&mut s, "{:02X}", b);
    }
    s
}

/// Upper-case hex with a single space between bytes, the layout used by
/// frame traces.
///
/// Example: `&[0x90, 0x60]` -> `"90 60"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push(' ');
        }
        let _ = write!(&mut s, "{:02X}", b);
    }
    s
}

/// Parse a hex string into bytes.
///
/// ASCII whitespace is ignored. An odd number of digits is accepted by
/// left-padding with a zero nibble, so `"abc"` parses as `[0x0a, 0xbc]`.
pub fn parse_hex(s: &str) -> Result<Vec<u8>> {
    let mut digits = Vec::with_capacity(s.len() + 1);
    for c in s.chars().filter(|c| !c.is_ascii_whitespace()) {
        let nibble = c
            .to_digit(16)
            .ok_or_else(|| Error::InvalidArgument(format!("invalid hex digit '{}'", c)))?;
        digits.push(nibble as u8);
    }
    if digits.len() % 2 != 0 {
        digits.insert(0, 0);
    }
    Ok(digits.chunks(2).map(|p| (p[0] << 4) | p[1]).collect())
}
