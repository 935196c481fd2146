//! CSS-style hex colors
//!
//! Colors come in from the parameters file and the settings palette as
//! `#RRGGBB` strings. They are kept as plain 8-bit RGB and converted to the
//! renderer's color type only at draw time.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// An opaque 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("color must start with '#': {0:?}")]
    MissingHash(String),
    #[error("color must have 3 or 6 hex digits: {0:?}")]
    BadLength(String),
    #[error("invalid hex digit in color: {0:?}")]
    BadDigit(String),
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Formats as uppercase `#RRGGBB`
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    /// Accepts `#RRGGBB` and the short `#RGB` form, case-insensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(s.to_string()))?;

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::BadDigit(s.to_string()));
        }

        let channel = |hex: &str| {
            u8::from_str_radix(hex, 16).map_err(|_| ColorParseError::BadDigit(s.to_string()))
        };

        match digits.len() {
            6 => Ok(Rgb {
                r: channel(&digits[0..2])?,
                g: channel(&digits[2..4])?,
                b: channel(&digits[4..6])?,
            }),
            3 => {
                // "#F0A" expands to "#FF00AA"
                let r = channel(&digits[0..1])?;
                let g = channel(&digits[1..2])?;
                let b = channel(&digits[2..3])?;
                Ok(Rgb { r: r * 17, g: g * 17, b: b * 17 })
            }
            _ => Err(ColorParseError::BadLength(s.to_string())),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_form() {
        let c: Rgb = "#FF8000".parse().unwrap();
        assert_eq!(c, Rgb::new(255, 128, 0));

        let lower: Rgb = "#ff8000".parse().unwrap();
        assert_eq!(lower, c);
    }

    #[test]
    fn test_parse_short_form() {
        let c: Rgb = "#F0A".parse().unwrap();
        assert_eq!(c, Rgb::new(255, 0, 170));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!("FF0000".parse::<Rgb>(), Err(ColorParseError::MissingHash(_))));
        assert!(matches!("#FF00".parse::<Rgb>(), Err(ColorParseError::BadLength(_))));
        assert!(matches!("#GG0000".parse::<Rgb>(), Err(ColorParseError::BadDigit(_))));
    }

    #[test]
    fn test_hex_is_uppercase() {
        assert_eq!(Rgb::new(0, 255, 10).to_hex(), "#00FF0A");
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&Rgb::new(255, 0, 0)).unwrap();
        assert_eq!(json, "\"#FF0000\"");

        let back: Rgb = serde_json::from_str("\"#00ff00\"").unwrap();
        assert_eq!(back, Rgb::new(0, 255, 0));
    }
}
