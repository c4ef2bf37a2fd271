//! Hex color parsing and the normalized RGBA type used throughout the config.
//!
//! Config scripts express every color as `#RRGGBB` or `#RRGGBBAA`. Parsing is
//! strict: anything else is rejected with a [`ColorParseError`] and callers
//! keep whatever color they already had.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A color with red, green, blue and alpha components normalized to 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

/// Why a hex color string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("invalid color format {0:?}: expected a leading '#'")]
    MissingHash(String),

    #[error("invalid color format {input:?}: expected 7 or 9 characters, got {len}")]
    InvalidLength { input: String, len: usize },

    #[error("invalid color format {input:?}: {found:?} is not a hexadecimal digit")]
    InvalidDigit { input: String, found: char },
}

impl ColorParseError {
    /// The string that failed to parse.
    pub fn input(&self) -> &str {
        match self {
            ColorParseError::MissingHash(input)
            | ColorParseError::InvalidLength { input, .. }
            | ColorParseError::InvalidDigit { input, .. } => input,
        }
    }
}

impl Rgba {
    pub const fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Opaque color from normalized RGB components.
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::new(red, green, blue, 1.0)
    }

    /// Convert a `[u8; 4]` RGBA color to normalized components.
    #[inline]
    pub fn from_u8x4(rgba: [u8; 4]) -> Self {
        Self {
            red: f64::from(rgba[0]) / 255.0,
            green: f64::from(rgba[1]) / 255.0,
            blue: f64::from(rgba[2]) / 255.0,
            alpha: f64::from(rgba[3]) / 255.0,
        }
    }

    /// Convert back to 8-bit channels, rounding to the nearest step.
    pub fn to_u8x4(self) -> [u8; 4] {
        let channel = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [
            channel(self.red),
            channel(self.green),
            channel(self.blue),
            channel(self.alpha),
        ]
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (case-insensitive).
    ///
    /// The 7-character form is fully opaque.
    pub fn from_hex(text: &str) -> Result<Self, ColorParseError> {
        let Some(digits) = text.strip_prefix('#') else {
            return Err(ColorParseError::MissingHash(text.to_string()));
        };

        // Length is checked on the whole string, '#' included.
        if text.len() != 7 && text.len() != 9 {
            return Err(ColorParseError::InvalidLength {
                input: text.to_string(),
                len: text.chars().count(),
            });
        }

        if let Some(found) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit {
                input: text.to_string(),
                found,
            });
        }

        // All digits are ASCII from here on, so byte slicing is on char boundaries.
        let channel = |offset: usize| -> Result<u8, ColorParseError> {
            u8::from_str_radix(&digits[offset..offset + 2], 16).map_err(|_| {
                ColorParseError::InvalidDigit {
                    input: text.to_string(),
                    found: digits[offset..].chars().next().unwrap_or('#'),
                }
            })
        };

        let alpha = if digits.len() == 8 { channel(6)? } else { 0xFF };
        Ok(Self::from_u8x4([channel(0)?, channel(2)?, channel(4)?, alpha]))
    }

    /// Render as `#rrggbbaa`.
    pub fn to_hex(self) -> String {
        let [r, g, b, a] = self.to_u8x4();
        format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
    }
}

impl std::str::FromStr for Rgba {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl std::fmt::Display for Rgba {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Parse `text` into `dest`, leaving `dest` untouched on failure.
///
/// Returns the parse error so the caller can report it.
pub fn parse_hex_into(text: &str, dest: &mut Rgba) -> Result<(), ColorParseError> {
    *dest = Rgba::from_hex(text)?;
    Ok(())
}
