//! Subcommands of the `hexapawn` binary

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::{config::Config, render::Document};

pub mod line;
pub mod positions;
pub mod tree;

/// Options shared by the commands that produce a LaTeX document
#[derive(Args, Debug, Clone, Default)]
pub struct RenderArgs {
    /// JSON configuration file (board width, colors, layout)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// LaTeX template containing a `%TIKZ` line
    #[arg(long, short = 't')]
    pub template: Option<PathBuf>,

    /// Output file; stdout when omitted
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

impl RenderArgs {
    pub fn load_config(&self) -> Result<Config> {
        match &self.config {
            Some(path) => Config::from_path(path)
                .with_context(|| format!("failed to load config {}", path.display())),
            None => Ok(Config::default()),
        }
    }

    pub fn document<'a>(&self, config: &'a Config) -> Result<Document<'a>> {
        let document = Document::new(config);
        match &self.template {
            Some(path) => Ok(document.with_template_file(path)?),
            None => Ok(document),
        }
    }
}
