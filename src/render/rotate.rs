//! Quarter-turn tile rotation.
//!
//! Rotates about the tile centre with the canvas size unchanged; any pixel
//! whose inverse mapping falls outside the source is filled with white
//! background. Tiles are square in practice, so nothing is lost.

use std::borrow::Cow;

use image::{GrayImage, Luma};

use crate::glyphs::Glyph;
use crate::types::Rotation;

/// White background for pixels without a source.
const BACKGROUND: Luma<u8> = Luma([255]);

/// Rotate a glyph clockwise by a quarter-turn multiple.
///
/// A 0 degree rotation is a no-op and returns the input without copying.
pub fn rotate(glyph: &Glyph, rotation: Rotation) -> Cow<'_, Glyph> {
    if rotation == Rotation::Deg0 {
        return Cow::Borrowed(glyph);
    }

    let (w, h) = glyph.dimensions();
    let mut out = GrayImage::from_pixel(w, h, BACKGROUND);

    for dy in 0..h {
        for dx in 0..w {
            // Inverse mapping: where in the source does this output pixel
            // come from, given a clockwise rotation?
            let (sx, sy) = match rotation {
                Rotation::Deg0 => (dx, dy),
                Rotation::Deg90 => (dy, h.wrapping_sub(1 + dx)),
                Rotation::Deg180 => (w.wrapping_sub(1 + dx), h.wrapping_sub(1 + dy)),
                Rotation::Deg270 => (w.wrapping_sub(1 + dy), dx),
            };

            if sx < w && sy < h {
                out.put_pixel(dx, dy, *glyph.get_pixel(sx, sy));
            }
        }
    }

    Cow::Owned(out)
}
