//! Output writer: persists the composed pattern and its metadata sidecar.
//!
//! Filenames embed the barcode and a seconds-resolution timestamp. That is
//! best-effort collision avoidance only; callers needing strict uniqueness
//! must disambiguate themselves.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use image::RgbImage;

use crate::error::{PgenError, Result};
use crate::types::{palette_entry, Barcode, Colour, DecodedBarcode};

/// Paths produced by a successful write.
#[derive(Debug, Clone)]
pub struct WrittenPattern {
    /// The lossless PNG raster.
    pub image_path: PathBuf,
    /// The plain-text sidecar describing the pattern.
    pub metadata_path: PathBuf,
}

/// Write the composed image and its sidecar into `output_dir`.
///
/// The directory is created if absent. Any write failure propagates with
/// the failing path; if the sidecar write fails after the image was
/// written, the call still fails and nothing references the sidecar.
pub fn write_pattern(
    image: &RgbImage,
    output_dir: &Path,
    barcode: &Barcode,
    decoded: &DecodedBarcode,
    accent: Option<Colour>,
) -> Result<WrittenPattern> {
    fs::create_dir_all(output_dir).map_err(|e| PgenError::Io {
        path: output_dir.to_path_buf(),
        message: format!("Failed to create output directory: {}", e),
    })?;

    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S").to_string();
    let base = format!("pattern_{}_{}", barcode, timestamp);

    let image_path = output_dir.join(format!("{base}.png"));
    let metadata_path = output_dir.join(format!("{base}.txt"));

    image.save(&image_path).map_err(|e| PgenError::Io {
        path: image_path.clone(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    let metadata = render_metadata(barcode, &timestamp, decoded, accent);
    fs::write(&metadata_path, metadata).map_err(|e| PgenError::Io {
        path: metadata_path.clone(),
        message: format!("Failed to write metadata sidecar: {}", e),
    })?;

    Ok(WrittenPattern {
        image_path,
        metadata_path,
    })
}

/// Render the human-readable sidecar contents.
fn render_metadata(
    barcode: &Barcode,
    timestamp: &str,
    decoded: &DecodedBarcode,
    accent: Option<Colour>,
) -> String {
    let entry = palette_entry(decoded.colour_index);

    let mut out = String::new();
    let _ = writeln!(out, "barcode: {}", barcode);
    let _ = writeln!(out, "generated: {}", timestamp);
    let _ = writeln!(
        out,
        "palette colour: {} ({})",
        decoded.colour_index, entry.name
    );
    let _ = writeln!(out, "palette rgb: {}", rgb_triple(entry.colour));
    if let Some(accent) = accent {
        let _ = writeln!(out, "accent hex: {}", accent);
        let _ = writeln!(out, "accent rgb: {}", rgb_triple(accent));
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "tiles:");
    for (i, tile) in decoded.tiles.iter().enumerate() {
        let _ = writeln!(
            out,
            "  tile {}: row {}, col {}, rotation {}",
            i + 1,
            tile.row,
            tile.col,
            tile.rotation
        );
    }
    out
}

fn rgb_triple(colour: Colour) -> String {
    format!("({}, {}, {})", colour.r, colour.g, colour.b)
}
