//! Glyph tile library.
//!
//! Loads the 10x10 space of base tiles from a directory, converting each to
//! single-channel luminance. A tile may be named by any of three
//! conventions; candidates are tried in a fixed priority order and the
//! first existing file wins. Tiles that fail to decode are reported and
//! skipped; a directory yielding no tiles at all is fatal.

use std::borrow::Cow;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use image::{GrayImage, Luma};

use crate::error::{PgenError, Result};
use crate::report::Diagnostics;

/// A base tile raster: square, single-channel luminance.
pub type Glyph = GrayImage;

/// Index of a glyph: (row digit, column digit).
pub type GlyphKey = (u8, u8);

/// Tile side length used for the blank fallback when no loaded glyph can
/// supply one.
pub const DEFAULT_TILE_SIZE: u32 = 256;

/// Filename builders for a glyph key, in priority order. The first
/// convention that names an existing file wins.
const NAMING_CONVENTIONS: [fn(u8, u8) -> String; 3] = [
    |row, col| format!("{row}{col}.png"),
    |row, col| format!("{row}-{col}.png"),
    |row, col| format!("({row},{col}).png"),
];

/// The candidate filenames for a glyph key, highest priority first.
pub fn candidate_filenames(row: u8, col: u8) -> Vec<String> {
    NAMING_CONVENTIONS.iter().map(|f| f(row, col)).collect()
}

/// An in-memory index of glyph tiles, immutable after loading.
#[derive(Debug, Clone)]
pub struct GlyphLibrary {
    dir: PathBuf,
    glyphs: HashMap<GlyphKey, Glyph>,
    tile_size: u32,
}

impl GlyphLibrary {
    /// Load all available glyphs from a directory.
    ///
    /// Decode failures for individual files are reported to `diags` and the
    /// key stays absent. A missing directory, or one from which no glyph
    /// loads, fails with [`PgenError::LibraryNotFound`].
    pub fn load(dir: &Path, diags: &mut Diagnostics) -> Result<Self> {
        if !dir.is_dir() {
            return Err(PgenError::LibraryNotFound {
                path: dir.to_path_buf(),
            });
        }

        let mut glyphs = HashMap::new();
        let mut tile_size = None;

        for row in 0..10 {
            for col in 0..10 {
                let Some(path) = find_glyph_file(dir, row, col) else {
                    continue;
                };

                match image::open(&path) {
                    Ok(img) => {
                        let glyph = img.to_luma8();
                        tile_size.get_or_insert(glyph.width());
                        glyphs.insert((row, col), glyph);
                    }
                    Err(e) => {
                        diags.warning(
                            "pgen::glyphs::decode-failed",
                            format!("failed to decode {}: {}", path.display(), e),
                        );
                    }
                }
            }
        }

        if glyphs.is_empty() {
            return Err(PgenError::LibraryNotFound {
                path: dir.to_path_buf(),
            });
        }

        Ok(Self {
            dir: dir.to_path_buf(),
            glyphs,
            tile_size: tile_size.unwrap_or(DEFAULT_TILE_SIZE),
        })
    }

    /// Look up the glyph for a key, if one was loaded.
    pub fn lookup(&self, key: GlyphKey) -> Option<&Glyph> {
        self.glyphs.get(&key)
    }

    /// Resolve a key through the substitution chain.
    ///
    /// Missing key falls back to glyph (0,0); if that is also absent, a
    /// blank white tile at the library tile size is synthesized. Each
    /// substitution emits a warning, so generation never fails over a
    /// missing tile file.
    pub fn resolve<'a>(&'a self, key: GlyphKey, diags: &mut Diagnostics) -> Cow<'a, Glyph> {
        if let Some(glyph) = self.lookup(key) {
            return Cow::Borrowed(glyph);
        }

        diags.warning(
            "pgen::glyphs::missing-tile",
            format!(
                "no tile for ({},{}) in {}, substituting (0,0)",
                key.0,
                key.1,
                self.dir.display()
            ),
        );

        if let Some(glyph) = self.lookup((0, 0)) {
            return Cow::Borrowed(glyph);
        }

        diags.warning(
            "pgen::glyphs::fallback-blank",
            format!("tile (0,0) also missing, using a blank {0}x{0} tile", self.tile_size),
        );

        Cow::Owned(GrayImage::from_pixel(
            self.tile_size,
            self.tile_size,
            Luma([255]),
        ))
    }

    /// Side length of tiles in this library.
    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Number of loaded glyphs.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Check whether any glyphs loaded.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// The directory this library was loaded from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

/// Find the file for a glyph key, trying each naming convention in order.
fn find_glyph_file(dir: &Path, row: u8, col: u8) -> Option<PathBuf> {
    NAMING_CONVENTIONS
        .iter()
        .map(|f| dir.join(f(row, col)))
        .find(|candidate| candidate.exists())
}
