//! The fixed ten-colour barcode palette.
//!
//! The final barcode digit selects one of these entries. Order and exact
//! RGB values are load-bearing: consumers comparing rendered output expect
//! them bit-for-bit.

use super::Colour;

/// A named palette colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    /// Colour name as written into the metadata sidecar.
    pub name: &'static str,
    /// The tint applied to ink pixels.
    pub colour: Colour,
}

/// Palette entries in barcode-digit order (digit 0 through 9).
pub const PALETTE: [PaletteEntry; 10] = [
    PaletteEntry { name: "red", colour: Colour::rgb(255, 0, 0) },
    PaletteEntry { name: "orange", colour: Colour::rgb(255, 165, 0) },
    PaletteEntry { name: "yellow", colour: Colour::rgb(255, 255, 0) },
    PaletteEntry { name: "green", colour: Colour::rgb(0, 255, 0) },
    PaletteEntry { name: "blue", colour: Colour::rgb(0, 0, 255) },
    PaletteEntry { name: "indigo", colour: Colour::rgb(75, 0, 130) },
    PaletteEntry { name: "violet", colour: Colour::rgb(148, 0, 211) },
    PaletteEntry { name: "pink", colour: Colour::rgb(255, 192, 203) },
    PaletteEntry { name: "brown", colour: Colour::rgb(165, 42, 42) },
    PaletteEntry { name: "grey", colour: Colour::rgb(128, 128, 128) },
];

/// Look up the palette entry for a colour index.
///
/// Indices come from the barcode decoder and are always a single digit,
/// so every value in range is valid.
pub fn palette_entry(index: u8) -> &'static PaletteEntry {
    &PALETTE[index as usize % PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_order() {
        let names: Vec<&str> = PALETTE.iter().map(|e| e.name).collect();
        assert_eq!(
            names,
            vec![
                "red", "orange", "yellow", "green", "blue", "indigo", "violet", "pink",
                "brown", "grey"
            ]
        );
    }

    #[test]
    fn test_exact_values() {
        assert_eq!(palette_entry(0).colour, Colour::rgb(255, 0, 0));
        assert_eq!(palette_entry(4).colour, Colour::rgb(0, 0, 255));
        assert_eq!(palette_entry(5).colour, Colour::rgb(75, 0, 130));
        assert_eq!(palette_entry(6).colour, Colour::rgb(148, 0, 211));
        assert_eq!(palette_entry(7).colour, Colour::rgb(255, 192, 203));
        assert_eq!(palette_entry(8).colour, Colour::rgb(165, 42, 42));
        assert_eq!(palette_entry(9).colour, Colour::rgb(128, 128, 128));
    }

    #[test]
    fn test_every_digit_resolves() {
        for digit in 0..10u8 {
            let entry = palette_entry(digit);
            assert!(!entry.name.is_empty());
        }
    }
}
