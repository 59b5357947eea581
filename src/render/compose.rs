//! 2x2 grid composition of tinted tiles.
//!
//! Placement is fixed and content-independent: tiles 0..3 land at
//! top-left, top-right, bottom-left, bottom-right. Which colour went into
//! each tile is the pipeline driver's policy, not this module's.

use image::{imageops, Rgb, RgbImage};

use crate::error::{PgenError, Result};

/// Assemble four equally sized tiles into one 2n x 2n image.
///
/// All tiles must be n x n; a mismatch is an internal invariant violation
/// surfaced as [`PgenError::DimensionMismatch`], never silently coerced.
pub fn compose(tiles: &[RgbImage; 4]) -> Result<RgbImage> {
    let size = tiles[0].width();

    for (index, tile) in tiles.iter().enumerate() {
        if tile.dimensions() != (size, size) {
            return Err(PgenError::DimensionMismatch {
                index,
                expected_w: size,
                expected_h: size,
                found_w: tile.width(),
                found_h: tile.height(),
            });
        }
    }

    let mut canvas = RgbImage::from_pixel(size * 2, size * 2, Rgb([255, 255, 255]));

    let positions: [(i64, i64); 4] = [
        (0, 0),
        (size as i64, 0),
        (0, size as i64),
        (size as i64, size as i64),
    ];

    for (tile, (x, y)) in tiles.iter().zip(positions) {
        imageops::replace(&mut canvas, tile, x, y);
    }

    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(size: u32, rgb: [u8; 3]) -> RgbImage {
        RgbImage::from_pixel(size, size, Rgb(rgb))
    }

    #[test]
    fn test_output_dimensions() {
        let tiles = [
            solid(4, [255, 0, 0]),
            solid(4, [0, 255, 0]),
            solid(4, [0, 0, 255]),
            solid(4, [0, 0, 0]),
        ];

        let grid = compose(&tiles).unwrap();
        assert_eq!(grid.dimensions(), (8, 8));
    }

    #[test]
    fn test_quadrant_placement_by_corner_sampling() {
        let tiles = [
            solid(4, [255, 0, 0]),
            solid(4, [0, 255, 0]),
            solid(4, [0, 0, 255]),
            solid(4, [9, 9, 9]),
        ];

        let grid = compose(&tiles).unwrap();

        assert_eq!(grid.get_pixel(0, 0).0, [255, 0, 0]); // top-left
        assert_eq!(grid.get_pixel(7, 0).0, [0, 255, 0]); // top-right
        assert_eq!(grid.get_pixel(0, 7).0, [0, 0, 255]); // bottom-left
        assert_eq!(grid.get_pixel(7, 7).0, [9, 9, 9]); // bottom-right
    }

    #[test]
    fn test_placement_independent_of_content() {
        // Identical tiles still produce a well-formed grid.
        let tiles = [
            solid(2, [1, 2, 3]),
            solid(2, [1, 2, 3]),
            solid(2, [1, 2, 3]),
            solid(2, [1, 2, 3]),
        ];

        let grid = compose(&tiles).unwrap();
        assert_eq!(grid.dimensions(), (4, 4));
        assert_eq!(grid.get_pixel(3, 3).0, [1, 2, 3]);
    }

    #[test]
    fn test_dimension_mismatch() {
        let tiles = [
            solid(4, [0, 0, 0]),
            solid(4, [0, 0, 0]),
            solid(3, [0, 0, 0]),
            solid(4, [0, 0, 0]),
        ];

        let err = compose(&tiles).unwrap_err();
        assert!(matches!(
            err,
            PgenError::DimensionMismatch { index: 2, found_w: 3, .. }
        ));
    }

    #[test]
    fn test_non_square_tile_rejected() {
        let wide = RgbImage::from_pixel(4, 2, Rgb([0, 0, 0]));
        let tiles = [solid(4, [0, 0, 0]), wide, solid(4, [0, 0, 0]), solid(4, [0, 0, 0])];

        let err = compose(&tiles).unwrap_err();
        assert!(matches!(err, PgenError::DimensionMismatch { index: 1, .. }));
    }
}
