//! TikZ diagrams of single positions

use crate::{
    config::Config,
    hexapawn::{Board, Move, SIZE},
};

/// Shade of a board square, named the way the chess fonts name them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shade {
    Light,
    Dark,
}

impl Shade {
    fn of(x: i8, y: i8) -> Shade {
        if (x + y) % 2 == 1 {
            Shade::Light
        } else {
            Shade::Dark
        }
    }

    fn font_name(self) -> &'static str {
        match self {
            Shade::Light => "White",
            Shade::Dark => "Black",
        }
    }
}

/// Draws a position together with an arrow for each of its legal moves.
///
/// The i-th legal move is drawn in the i-th configured color, so a printed
/// diagram and a set of colored tokens stay in correspondence.
#[derive(Debug, Clone, Copy)]
pub struct TikzRenderer<'a> {
    config: &'a Config,
}

impl<'a> TikzRenderer<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    fn point(&self, x: f64, y: f64) -> String {
        format!("({}, {})", self.config.units(x), self.config.units(y))
    }

    fn center(&self, x: i8, y: i8) -> String {
        let s = self.config.space_size();
        self.point((f64::from(x) + 0.5) * s, (f64::from(y) + 0.5) * s)
    }

    /// Render `board` as a `tikzpicture`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::PaletteExhausted`] if the board has more legal
    /// moves than there are configured colors.
    pub fn draw(&self, board: &Board) -> Result<String, crate::Error> {
        let moves = board.legal_moves();
        if moves.len() > self.config.colors.len() {
            return Err(crate::Error::PaletteExhausted {
                moves: moves.len(),
                colors: self.config.colors.len(),
            });
        }

        let s = self.config.space_size();
        let mut lines = vec![r"\begin{tikzpicture}".to_string()];

        for y in 0..SIZE {
            for x in 0..SIZE {
                let shade = Shade::of(x, y);
                let glyph = match board.space(x, y) {
                    Some(pawn) => Some(format!(
                        "{}PawnOn{}",
                        pawn.owner.name(),
                        shade.font_name()
                    )),
                    None if shade == Shade::Dark => Some("BlackEmptySquare".to_string()),
                    None => None,
                };
                if let Some(glyph) = glyph {
                    lines.push(format!(r"\draw {} node {{\{glyph}}};", self.center(x, y)));
                }

                let (left, bottom) = (f64::from(x) * s, f64::from(y) * s);
                lines.push(format!(
                    r"\draw[thick] {} rectangle {};",
                    self.point(left, bottom),
                    self.point(left + s, bottom + s)
                ));
            }
        }

        for (mv, color) in moves.iter().zip(&self.config.colors) {
            lines.push(self.arrow(mv, color));
        }

        lines.push(r"\end{tikzpicture}".to_string());
        Ok(lines.join("\n"))
    }

    fn arrow(&self, mv: &Move, color: &str) -> String {
        let (from_x, from_y) = mv.origin();
        format!(
            r"\draw [line width=0.6mm, {color}, -{{Stealth[scale=1]}}] {} -- {};",
            self.center(from_x, from_y),
            self.center(mv.x, mv.y)
        )
    }

    /// Render each board of a game in order.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by [`TikzRenderer::draw`].
    pub fn draw_all<'b>(
        &self,
        boards: impl IntoIterator<Item = &'b Board>,
    ) -> Result<Vec<String>, crate::Error> {
        boards.into_iter().map(|board| self.draw(board)).collect()
    }
}
