pub mod completions;
pub mod decode;
pub mod generate;
pub mod palette;

use clap::{Parser, Subcommand};

/// pgen - Barcode pattern image generator
#[derive(Parser, Debug)]
#[command(name = "pgen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a pattern image from a 13-digit barcode
    Generate(generate::GenerateArgs),

    /// Decode a barcode and print its tile descriptors without rendering
    Decode(decode::DecodeArgs),

    /// List the fixed ten-colour palette
    Palette(palette::PaletteArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
