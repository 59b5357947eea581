//! Generate command implementation.
//!
//! Loads the glyph library, runs the generation pipeline, and reports
//! warnings and the written paths.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::generate::PatternGenerator;
use crate::manifest::Manifest;
use crate::output::{display_path, plural, Printer};
use crate::report::Diagnostics;

/// Generate a pattern image from a 13-digit barcode
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// The 13-digit barcode to render
    #[arg(required = true)]
    pub barcode: String,

    /// Accent colour for the lower quadrants (#rrggbb)
    #[arg(long)]
    pub accent: Option<String>,

    /// Glyph tile directory (overrides pgen.yaml)
    #[arg(long)]
    pub glyphs: Option<PathBuf>,

    /// Output directory (overrides pgen.yaml)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub fn run(args: GenerateArgs, printer: &Printer) -> Result<()> {
    let manifest = Manifest::discover()?;
    let glyph_dir = args.glyphs.unwrap_or(manifest.glyphs);
    let output_dir = args.output.unwrap_or(manifest.output);

    let mut diags = Diagnostics::new();
    let generator = PatternGenerator::new(&glyph_dir, output_dir, &mut diags)?;

    printer.info(
        "Loaded",
        &format!(
            "{} from {}",
            plural(generator.library().len(), "glyph", "glyphs"),
            display_path(&glyph_dir)
        ),
    );

    let result = generator.generate(&args.barcode, args.accent.as_deref(), &mut diags)?;

    for diagnostic in diags.iter() {
        printer.warning("Warning", &format!("{} [{}]", diagnostic.message, diagnostic.code));
    }

    printer.status("Generated", &display_path(&result.image_path));
    printer.status("Described", &display_path(&result.metadata_path));

    Ok(())
}
