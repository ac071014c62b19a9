//! LaTeX document assembly from a template

use std::{borrow::Cow, fs, path::Path};

use crate::{
    config::Config,
    hexapawn::{Board, Catalog},
};

use super::tikz::TikzRenderer;

/// Line of the template that is replaced by the generated diagrams
pub const PLACEHOLDER: &str = "%TIKZ";

/// Template used when none is supplied
pub const DEFAULT_TEMPLATE: &str = include_str!("../../templates/base.tex");

/// A LaTeX document built from a template and a set of diagrams
#[derive(Debug, Clone)]
pub struct Document<'a> {
    config: &'a Config,
    template: Cow<'a, str>,
}

impl<'a> Document<'a> {
    /// Document based on [`DEFAULT_TEMPLATE`]
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            template: Cow::Borrowed(DEFAULT_TEMPLATE),
        }
    }

    pub fn with_template(mut self, template: impl Into<Cow<'a, str>>) -> Self {
        self.template = template.into();
        self
    }

    /// Read the template from `path`.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read.
    pub fn with_template_file(self, path: impl AsRef<Path>) -> Result<Self, crate::Error> {
        let path = path.as_ref();
        let template = fs::read_to_string(path).map_err(|source| crate::Error::Io {
            operation: format!("read template {}", path.display()),
            source,
        })?;
        Ok(self.with_template(template))
    }

    /// Copy the template, replacing the placeholder line with the board
    /// font size declaration followed by `body`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MissingPlaceholder`] if no template line
    /// consists of [`PLACEHOLDER`].
    pub fn render(&self, body: &str) -> Result<String, crate::Error> {
        let mut out = String::with_capacity(self.template.len() + body.len());
        let mut found = false;

        for line in self.template.lines() {
            let line = line.trim();
            if line == PLACEHOLDER {
                found = true;
                out.push_str(&format!(
                    "\\setboardfontsize{{{}}}\n",
                    self.config.units(self.config.space_size())
                ));
                out.push_str(body);
            } else {
                out.push_str(line);
            }
            out.push('\n');
        }

        if !found {
            return Err(crate::Error::MissingPlaceholder {
                placeholder: PLACEHOLDER.to_string(),
            });
        }

        Ok(out)
    }

    /// Arrange diagrams into rows of `boards_per_row`
    fn layout(&self, diagrams: &[String]) -> String {
        let per_row = self.config.boards_per_row.max(1);
        let mut out = String::new();

        for (i, diagram) in diagrams.iter().enumerate() {
            out.push_str(diagram);
            out.push('\n');
            let last = i + 1 == diagrams.len();
            if last {
                break;
            }
            if (i + 1) % per_row == 0 {
                out.push_str(&format!(
                    "\\\\[{}]\n",
                    self.config.units(self.config.vertical_spacing)
                ));
            } else {
                out.push_str(&format!(
                    "\\hspace{{{}}}%\n",
                    self.config.units(self.config.horizontal_spacing)
                ));
            }
        }

        out
    }

    /// Body listing every catalogued position, one section per ply.
    ///
    /// # Errors
    ///
    /// Returns error if any position cannot be drawn.
    pub fn catalog_body(&self, catalog: &Catalog) -> Result<String, crate::Error> {
        let renderer = TikzRenderer::new(self.config);
        let mut out = String::new();

        for (ply, boards) in catalog.plies() {
            let diagrams = renderer.draw_all(boards)?;
            out.push_str(&format!(
                "\\subsection*{{{} to move, ply {}}}\n",
                catalog.player(),
                ply
            ));
            out.push_str("\\noindent\n");
            out.push_str(&self.layout(&diagrams));
            out.push('\n');
        }

        Ok(out)
    }

    /// Body showing the boards of a single game in sequence.
    ///
    /// # Errors
    ///
    /// Returns error if any board cannot be drawn.
    pub fn line_body(&self, boards: &[Board]) -> Result<String, crate::Error> {
        let diagrams = TikzRenderer::new(self.config).draw_all(boards)?;
        Ok(self.layout(&diagrams))
    }
}
