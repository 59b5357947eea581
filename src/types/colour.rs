//! Colour type and accent parsing.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{PgenError, Result};

/// An opaque RGB colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    /// Create a colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// White (the pattern background).
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Parse an accent colour string.
    ///
    /// Accepts `#rrggbb` with a case-insensitive hex payload; the leading
    /// `#` may be omitted. Anything else fails with
    /// [`PgenError::InvalidAccentColour`].
    pub fn from_hex(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if hex.len() != 6 || !hex.is_ascii() {
            return Err(PgenError::InvalidAccentColour {
                value: s.to_string(),
            });
        }

        let byte = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| PgenError::InvalidAccentColour {
                value: s.to_string(),
            })
        };

        Ok(Self::rgb(byte(0..2)?, byte(2..4)?, byte(4..6)?))
    }

    /// Convert to an RGB array (for image output).
    pub fn to_rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl FromStr for Colour {
    type Err = PgenError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
