//! Hex formatting and parsing.
//!
//! The canonical form is 8 uppercase digits, `AARRGGBB`. `Color` serializes
//! to that string and deserializes through [`from_hex_string`].

use crate::color::Color;
use crate::error::ColorError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Formats `color` as `AARRGGBB`, zero-padded to 8 uppercase digits.
pub fn to_hex_string(color: Color) -> String {
    format!("{:08X}", color.to_u32())
}

/// Parses `AARRGGBB` or `RRGGBB` (alpha 255), with an optional leading `#`.
///
/// Digits are case insensitive. Returns `ColorError::InvalidHex` for any
/// other length or for non-hex characters.
pub fn from_hex_string(hex: &str) -> Result<Color, ColorError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidHex(format!(
            "non-hex character in {hex:?}"
        )));
    }
    let value = match digits.len() {
        8 => parse_u32(digits)?,
        6 => 0xFF00_0000 | parse_u32(digits)?,
        n => {
            return Err(ColorError::InvalidHex(format!(
                "expected 6 or 8 hex digits, got {n}"
            )))
        }
    };
    Ok(Color::from_u32(value))
}

fn parse_u32(digits: &str) -> Result<u32, ColorError> {
    u32::from_str_radix(digits, 16).map_err(|e| ColorError::InvalidHex(e.to_string()))
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08X}", self.to_u32())
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        from_hex_string(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&to_hex_string(*self))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        from_hex_string(&s).map_err(serde::de::Error::custom)
    }
}
