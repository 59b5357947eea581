//! Threshold tinting of a luminance tile.
//!
//! A pure two-level threshold: ink pixels take the source colour, everything
//! else is white. No anti-aliasing or blending, so output is bit-stable for
//! a given tile and colour.

use image::{Rgb, RgbImage};

use crate::glyphs::Glyph;
use crate::types::Colour;

/// Luminance cutoff separating ink from background. Values below are ink.
///
/// Load-bearing constant: downstream consumers expect bit-identical output.
pub const INK_THRESHOLD: u8 = 128;

/// Tint a luminance glyph with a colour source.
///
/// Pixels with luminance below [`INK_THRESHOLD`] become `colour`; all
/// others become white.
pub fn colourize(glyph: &Glyph, colour: Colour) -> RgbImage {
    let ink = Rgb(colour.to_rgb());
    let background = Rgb(Colour::WHITE.to_rgb());

    RgbImage::from_fn(glyph.width(), glyph.height(), |x, y| {
        if glyph.get_pixel(x, y).0[0] < INK_THRESHOLD {
            ink
        } else {
            background
        }
    })
}

#[cfg(test)]
mod tests {
    use image::{GrayImage, Luma};

    use super::*;

    #[test]
    fn test_all_white_stays_white() {
        let glyph = GrayImage::from_pixel(4, 4, Luma([255]));
        let tinted = colourize(&glyph, Colour::rgb(0, 0, 255));

        for pixel in tinted.pixels() {
            assert_eq!(pixel.0, [255, 255, 255]);
        }
    }

    #[test]
    fn test_all_black_becomes_solid_fill() {
        let glyph = GrayImage::from_pixel(4, 4, Luma([0]));
        let tinted = colourize(&glyph, Colour::rgb(17, 34, 51));

        for pixel in tinted.pixels() {
            assert_eq!(pixel.0, [17, 34, 51]);
        }
    }

    #[test]
    fn test_threshold_boundary() {
        let mut glyph = GrayImage::from_pixel(2, 1, Luma([0]));
        glyph.put_pixel(0, 0, Luma([INK_THRESHOLD - 1]));
        glyph.put_pixel(1, 0, Luma([INK_THRESHOLD]));

        let tinted = colourize(&glyph, Colour::rgb(255, 0, 0));

        // 127 is ink, 128 is background.
        assert_eq!(tinted.get_pixel(0, 0).0, [255, 0, 0]);
        assert_eq!(tinted.get_pixel(1, 0).0, [255, 255, 255]);
    }

    #[test]
    fn test_dimensions_preserved() {
        let glyph = GrayImage::from_pixel(5, 5, Luma([0]));
        let tinted = colourize(&glyph, Colour::BLACK);
        assert_eq!(tinted.dimensions(), (5, 5));
    }
}
