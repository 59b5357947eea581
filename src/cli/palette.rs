use std::path::PathBuf;

use clap::Args;
use image::{Rgb, RgbImage};

use crate::error::{PgenError, Result};
use crate::output::{display_path, Printer};
use crate::types::PALETTE;

/// Swatch cell side length in pixels.
const SWATCH_CELL: u32 = 32;

/// List the fixed ten-colour palette
#[derive(Args, Debug)]
pub struct PaletteArgs {
    /// Write a horizontal swatch strip PNG to this path
    #[arg(long)]
    pub swatch: Option<PathBuf>,
}

pub fn run(args: PaletteArgs, printer: &Printer) -> Result<()> {
    // Print palette lines to stdout
    for (index, entry) in PALETTE.iter().enumerate() {
        println!("{}: {} {}", index, entry.name, entry.colour);
    }

    if let Some(path) = args.swatch {
        let strip = RgbImage::from_fn(SWATCH_CELL * PALETTE.len() as u32, SWATCH_CELL, |x, _| {
            Rgb(PALETTE[(x / SWATCH_CELL) as usize].colour.to_rgb())
        });

        strip.save(&path).map_err(|e| PgenError::Io {
            path: path.clone(),
            message: format!("Failed to write swatch: {}", e),
        })?;

        printer.status("Wrote", &display_path(&path));
    }

    Ok(())
}
