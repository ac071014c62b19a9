//! Positions command - Build the LaTeX catalog of positions for HER or HIM

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use crate::{
    cli::output::{create_spinner, write_output},
    hexapawn::{Catalog, Games, Player},
};

use super::RenderArgs;

#[derive(Parser, Debug, Clone, Default)]
#[command(about = "Build the positions required for a HER (default) or HIM learning system")]
pub struct PositionsArgs {
    /// Generate positions for HIM, the first player, instead of HER
    #[arg(long, short = 'i')]
    pub him: bool,

    #[command(flatten)]
    pub render: RenderArgs,
}

impl PositionsArgs {
    /// HIM moves first; HER answers
    pub fn player(&self) -> Player {
        if self.him { Player::White } else { Player::Black }
    }
}

/// Render the catalog document to a string
pub fn build_document(args: &PositionsArgs) -> Result<String> {
    let config = args.render.load_config()?;
    let document = args.render.document(&config)?;

    let spinner = create_spinner("Building game tree...")?;
    let games = Games::new();
    let catalog = Catalog::build(&games, args.player());
    spinner.finish_and_clear();

    info!(
        "{} positions for {} across {} plies",
        catalog.len(),
        catalog.player(),
        catalog.plies().len()
    );

    let body = document
        .catalog_body(&catalog)
        .context("failed to draw catalog")?;
    Ok(document.render(&body)?)
}

pub fn execute(args: PositionsArgs) -> Result<()> {
    let text = build_document(&args)?;
    write_output(args.render.output.as_deref(), &text)
}
