//! Tree command - Game tree and catalog statistics

use std::{fs::File, io::BufWriter, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    cli::output::{catalog_report, create_spinner, tree_report},
    hexapawn::{Catalog, Games, Player},
};

#[derive(Parser, Debug, Clone, Default)]
#[command(about = "Show game tree statistics")]
pub struct TreeArgs {
    /// Export the position catalogs of both players to a CSV file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

pub fn execute(args: TreeArgs) -> Result<()> {
    let spinner = create_spinner("Building game tree...")?;
    let games = Games::new();
    let catalogs = Player::all().map(|player| Catalog::build(&games, player));
    spinner.finish_and_clear();

    print!("{}", tree_report(&games.stats()));
    for catalog in &catalogs {
        print!("{}", catalog_report(catalog));
    }

    if let Some(path) = args.export {
        let file = File::create(&path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        Catalog::write_all_csv(&catalogs, BufWriter::new(file))?;
        println!("\nCatalog exported to: {}", path.display());
    }

    Ok(())
}
