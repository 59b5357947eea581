use clap::Parser;
use miette::Result;
use pgen::cli::{Cli, Commands};
use pgen::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Generate(args) => pgen::cli::generate::run(args, &printer)?,
        Commands::Decode(args) => pgen::cli::decode::run(args)?,
        Commands::Palette(args) => pgen::cli::palette::run(args, &printer)?,
        Commands::Completions(args) => pgen::cli::completions::run(args)?,
    }

    Ok(())
}
