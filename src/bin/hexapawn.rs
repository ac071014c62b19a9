//! Hexapawn CLI - Generate the printed positions of a Hexapawn learning system
//!
//! This CLI provides:
//! - The catalog of positions for HER (second player) or HIM (first player)
//! - Diagrams of a single sample game
//! - Game tree statistics and CSV export

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "hexapawn")]
#[command(version, about = "Hexapawn learning-aid generator", long_about = None)]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the LaTeX catalog of positions for HER or HIM
    Positions(hexapawn::cli::commands::positions::PositionsArgs),

    /// Draw the boards of one game
    Line(hexapawn::cli::commands::line::LineArgs),

    /// Show game tree statistics
    Tree(hexapawn::cli::commands::tree::TreeArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match cli.command {
        Commands::Positions(args) => hexapawn::cli::commands::positions::execute(args),
        Commands::Line(args) => hexapawn::cli::commands::line::execute(args),
        Commands::Tree(args) => hexapawn::cli::commands::tree::execute(args),
    }
}
