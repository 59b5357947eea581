//! pgen - Barcode pattern image generator
//!
//! A library for turning 13-digit barcodes into deterministic 2x2 glyph
//! pattern images: digits select indexed tiles, their rotations, and a
//! palette colour, with an optional accent colour tinting the lower
//! quadrants.

pub mod cli;
pub mod error;
pub mod generate;
pub mod glyphs;
pub mod manifest;
pub mod output;
pub mod render;
pub mod report;
pub mod types;
pub mod writer;

pub use error::{PgenError, Result};
pub use generate::{PatternGenerator, PatternResult};
pub use glyphs::{candidate_filenames, Glyph, GlyphKey, GlyphLibrary, DEFAULT_TILE_SIZE};
pub use manifest::Manifest;
pub use render::{colourize, compose, rotate, INK_THRESHOLD};
pub use report::{Diagnostic, Diagnostics, Severity};
pub use types::{
    decode, decode_valid, palette_entry, Barcode, Colour, DecodedBarcode, PaletteEntry, Rotation,
    TileDescriptor, BARCODE_LEN, PALETTE,
};
pub use writer::{write_pattern, WrittenPattern};
