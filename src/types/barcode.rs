//! Barcode validation and decoding.
//!
//! A barcode is exactly 13 decimal digits. The first 12 split into four
//! 3-digit groups, one per tile: row, column, rotation code. The last digit
//! selects the palette colour. Group order is tile order; nothing is
//! reordered.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::{PgenError, Result};

/// Number of digits in a barcode.
pub const BARCODE_LEN: usize = 13;

/// A validated 13-digit barcode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Barcode(String);

impl Barcode {
    /// Validate and wrap a barcode string.
    pub fn parse(code: &str) -> Result<Self> {
        let len = code.chars().count();
        if len != BARCODE_LEN {
            return Err(PgenError::InvalidLength { found: len });
        }

        for (position, c) in code.chars().enumerate() {
            if !c.is_ascii_digit() {
                return Err(PgenError::InvalidDigits { found: c, position });
            }
        }

        Ok(Self(code.to_string()))
    }

    /// The raw digit string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The digit at a position, as a number.
    fn digit(&self, index: usize) -> u8 {
        // Validated at construction: all ASCII digits.
        self.0.as_bytes()[index] - b'0'
    }
}

impl fmt::Display for Barcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A quarter-turn rotation, applied clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// Map a rotation code digit to its canonical angle.
    ///
    /// The stored code is multiplied by 90 and wrapped, so codes 4-9 fold
    /// back onto the four canonical angles (code 5 rotates 90, and so on).
    pub fn from_code(code: u8) -> Self {
        match code % 4 {
            0 => Rotation::Deg0,
            1 => Rotation::Deg90,
            2 => Rotation::Deg180,
            _ => Rotation::Deg270,
        }
    }

    /// The clockwise angle in degrees.
    pub fn degrees(self) -> u16 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }
}

impl Serialize for Rotation {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.degrees())
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.degrees())
    }
}

/// One tile of the pattern: which glyph to use and how to turn it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TileDescriptor {
    /// Glyph row digit.
    pub row: u8,
    /// Glyph column digit.
    pub col: u8,
    /// Clockwise rotation to apply.
    pub rotation: Rotation,
}

/// A fully decoded barcode: four tiles plus the palette colour index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedBarcode {
    /// Tile descriptors in quadrant order (TL, TR, BL, BR).
    pub tiles: [TileDescriptor; 4],
    /// Palette colour index from the 13th digit.
    pub colour_index: u8,
}

/// Decode a barcode string into tile descriptors and a colour index.
///
/// Fails with [`PgenError::InvalidLength`] or [`PgenError::InvalidDigits`]
/// before any other work happens.
pub fn decode(code: &str) -> Result<DecodedBarcode> {
    let barcode = Barcode::parse(code)?;
    Ok(decode_valid(&barcode))
}

/// Decode an already-validated barcode.
pub fn decode_valid(barcode: &Barcode) -> DecodedBarcode {
    let tile = |group: usize| TileDescriptor {
        row: barcode.digit(group * 3),
        col: barcode.digit(group * 3 + 1),
        rotation: Rotation::from_code(barcode.digit(group * 3 + 2)),
    };

    DecodedBarcode {
        tiles: [tile(0), tile(1), tile(2), tile(3)],
        colour_index: barcode.digit(12),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_decode_reference_barcode() {
        let decoded = decode("0001112223334").unwrap();

        assert_eq!(
            decoded.tiles,
            [
                TileDescriptor { row: 0, col: 0, rotation: Rotation::Deg0 },
                TileDescriptor { row: 1, col: 1, rotation: Rotation::Deg90 },
                TileDescriptor { row: 2, col: 2, rotation: Rotation::Deg180 },
                TileDescriptor { row: 3, col: 3, rotation: Rotation::Deg270 },
            ]
        );
        assert_eq!(decoded.colour_index, 4);
    }

    #[test]
    fn test_decode_all_valid_shapes() {
        // A spread of valid codes: rotations always land on a canonical
        // angle and the colour index is a single digit.
        for code in ["0000000000000", "9999999999999", "1234567890123"] {
            let decoded = decode(code).unwrap();
            for tile in &decoded.tiles {
                assert!(matches!(tile.rotation.degrees(), 0 | 90 | 180 | 270));
                assert!(tile.row <= 9 && tile.col <= 9);
            }
            assert!(decoded.colour_index <= 9);
        }
    }

    #[test]
    fn test_rotation_codes_wrap() {
        assert_eq!(Rotation::from_code(0), Rotation::Deg0);
        assert_eq!(Rotation::from_code(1), Rotation::Deg90);
        assert_eq!(Rotation::from_code(2), Rotation::Deg180);
        assert_eq!(Rotation::from_code(3), Rotation::Deg270);
        assert_eq!(Rotation::from_code(4), Rotation::Deg0);
        assert_eq!(Rotation::from_code(5), Rotation::Deg90);
        assert_eq!(Rotation::from_code(9), Rotation::Deg90);
    }

    #[test]
    fn test_invalid_length() {
        assert!(matches!(
            decode("123"),
            Err(PgenError::InvalidLength { found: 3 })
        ));
        assert!(matches!(
            decode("12345678901234"),
            Err(PgenError::InvalidLength { found: 14 })
        ));
        assert!(matches!(
            decode(""),
            Err(PgenError::InvalidLength { found: 0 })
        ));
    }

    #[test]
    fn test_invalid_digits() {
        assert!(matches!(
            decode("12345678901X3"),
            Err(PgenError::InvalidDigits { found: 'X', position: 11 })
        ));
        // Non-ASCII digits are rejected too, not silently accepted.
        assert!(matches!(
            decode("١٢٣٤٥٦٧٨٩٠١٢٣"),
            Err(PgenError::InvalidDigits { position: 0, .. })
        ));
    }

    #[test]
    fn test_barcode_display() {
        let barcode = Barcode::parse("0001112223334").unwrap();
        assert_eq!(barcode.to_string(), "0001112223334");
        assert_eq!(barcode.as_str(), "0001112223334");
    }

    #[test]
    fn test_rotation_serializes_as_degrees() {
        let json = serde_json::to_string(&Rotation::Deg270).unwrap();
        assert_eq!(json, "270");
    }
}
