//! The pattern generation pipeline.
//!
//! Decodes a barcode into four tile descriptors plus a palette colour,
//! resolves each glyph through the library, rotates and tints it, composes
//! the 2x2 grid, and writes the image with its metadata sidecar.
//!
//! The quadrant colour policy lives here, not in the compositor: the upper
//! two quadrants always take the barcode's palette colour, the lower two
//! take the accent colour when one is supplied and fall back to the
//! palette colour otherwise.

use std::path::{Path, PathBuf};

use image::RgbImage;

use crate::error::Result;
use crate::glyphs::GlyphLibrary;
use crate::render::{colourize, compose, rotate};
use crate::report::Diagnostics;
use crate::types::{decode_valid, palette_entry, Barcode, Colour, TileDescriptor};
use crate::writer::write_pattern;

/// The outcome of a generate call, handed off to the caller.
#[derive(Debug, Clone)]
pub struct PatternResult {
    /// Path of the written PNG.
    pub image_path: PathBuf,
    /// Path of the written metadata sidecar.
    pub metadata_path: PathBuf,
    /// Side length of the (square) output image in pixels.
    pub side_length: u32,
    /// Palette colour index from the barcode's final digit.
    pub colour_index: u8,
    /// Accent colour, when one was supplied.
    pub accent: Option<Colour>,
    /// The four decoded tile descriptors in quadrant order.
    pub tiles: [TileDescriptor; 4],
}

/// Barcode pattern generator.
///
/// Holds the glyph library (loaded once at construction, read-only after)
/// and the output directory. Safe to reuse across generate calls.
pub struct PatternGenerator {
    library: GlyphLibrary,
    output_dir: PathBuf,
}

impl PatternGenerator {
    /// Build a generator from a glyph directory and an output directory.
    ///
    /// Fails with [`crate::error::PgenError::LibraryNotFound`] when the
    /// glyph directory is unusable. The output directory is only created
    /// when a pattern is actually written.
    pub fn new(
        glyph_dir: &Path,
        output_dir: impl Into<PathBuf>,
        diags: &mut Diagnostics,
    ) -> Result<Self> {
        let library = GlyphLibrary::load(glyph_dir, diags)?;
        Ok(Self::with_library(library, output_dir))
    }

    /// Build a generator around an already loaded library.
    pub fn with_library(library: GlyphLibrary, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            library,
            output_dir: output_dir.into(),
        }
    }

    /// The loaded glyph library.
    pub fn library(&self) -> &GlyphLibrary {
        &self.library
    }

    /// Generate a pattern image for a barcode.
    ///
    /// All validation (barcode shape, accent format) happens before any
    /// rendering or I/O, so a caller error never leaves partial artifacts.
    pub fn generate(
        &self,
        code: &str,
        accent_hex: Option<&str>,
        diags: &mut Diagnostics,
    ) -> Result<PatternResult> {
        let barcode = Barcode::parse(code)?;
        let decoded = decode_valid(&barcode);
        let accent = accent_hex.map(Colour::from_hex).transpose()?;

        let palette = palette_entry(decoded.colour_index).colour;
        let lower = accent.unwrap_or(palette);
        // Resolved colour per quadrant, in placement order.
        let tile_colours = [palette, palette, lower, lower];

        let tinted: [RgbImage; 4] = std::array::from_fn(|i| {
            let tile = &decoded.tiles[i];
            let glyph = self.library.resolve((tile.row, tile.col), diags);
            let turned = rotate(&glyph, tile.rotation);
            colourize(&turned, tile_colours[i])
        });

        let grid = compose(&tinted)?;

        let written = write_pattern(&grid, &self.output_dir, &barcode, &decoded, accent)?;

        Ok(PatternResult {
            image_path: written.image_path,
            metadata_path: written.metadata_path,
            side_length: grid.width(),
            colour_index: decoded.colour_index,
            accent,
            tiles: decoded.tiles,
        })
    }
}
