//! Decode command implementation.
//!
//! Prints the tile descriptors and palette colour a barcode resolves to,
//! without touching the glyph library or rendering anything.

use clap::Args;
use serde::Serialize;

use crate::error::{PgenError, Result};
use crate::types::{decode, palette_entry, TileDescriptor};

/// Decode a barcode and print its tile descriptors without rendering
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// The 13-digit barcode to decode
    #[arg(required = true)]
    pub barcode: String,

    /// Emit machine-readable JSON on stdout
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct DecodeReport<'a> {
    barcode: &'a str,
    tiles: [TileDescriptor; 4],
    colour_index: u8,
    colour_name: &'static str,
    colour_hex: String,
}

pub fn run(args: DecodeArgs) -> Result<()> {
    let decoded = decode(&args.barcode)?;
    let entry = palette_entry(decoded.colour_index);

    if args.json {
        let report = DecodeReport {
            barcode: &args.barcode,
            tiles: decoded.tiles,
            colour_index: decoded.colour_index,
            colour_name: entry.name,
            colour_hex: entry.colour.to_string(),
        };
        let json = serde_json::to_string_pretty(&report).map_err(|e| PgenError::Parse {
            message: format!("Failed to encode JSON: {}", e),
            help: None,
        })?;
        println!("{}", json);
        return Ok(());
    }

    let code = &args.barcode;
    println!(
        "barcode: {} {} {} {} {}",
        &code[0..3],
        &code[3..6],
        &code[6..9],
        &code[9..12],
        &code[12..13]
    );
    for (i, tile) in decoded.tiles.iter().enumerate() {
        println!(
            "tile {}: glyph ({},{}), rotation {}",
            i + 1,
            tile.row,
            tile.col,
            tile.rotation
        );
    }
    println!(
        "colour: {} {} ({})",
        decoded.colour_index, entry.name, entry.colour
    );

    Ok(())
}
