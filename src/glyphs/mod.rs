//! Glyph tile loading and indexing.

mod library;

pub use library::{candidate_filenames, Glyph, GlyphKey, GlyphLibrary, DEFAULT_TILE_SIZE};
