//! Line command - Draw every board of a single game

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use crate::{
    cli::output::write_output,
    hexapawn::{Board, Move},
};

use super::RenderArgs;

/// Which legal move each side plays
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Pick {
    First,
    #[default]
    Last,
}

impl Pick {
    fn choose(self, moves: &[Move]) -> Option<&Move> {
        match self {
            Pick::First => moves.first(),
            Pick::Last => moves.last(),
        }
    }
}

#[derive(Parser, Debug, Clone, Default)]
#[command(about = "Draw the boards of one game, each side always picking the same move slot")]
pub struct LineArgs {
    /// Move slot both sides play
    #[arg(long, value_enum, default_value_t = Pick::Last)]
    pub pick: Pick,

    #[command(flatten)]
    pub render: RenderArgs,
}

/// Play from the starting position until the game is decided
pub fn play_line(pick: Pick) -> Result<Vec<Board>> {
    let mut board = Board::new();
    let mut boards = vec![board.clone()];

    while !board.is_terminal() {
        let moves = board.legal_moves();
        let Some(mv) = pick.choose(&moves) else {
            break;
        };
        board = board
            .make_move(mv)
            .with_context(|| format!("generated move {mv} was rejected"))?;
        boards.push(board.clone());
    }

    if let Some(winner) = board.winner() {
        info!("{winner} wins at ply {}", board.ply());
    }
    Ok(boards)
}

pub fn execute(args: LineArgs) -> Result<()> {
    let config = args.render.load_config()?;
    let document = args.render.document(&config)?;

    let boards = play_line(args.pick)?;
    let body = document.line_body(&boards)?;
    write_output(args.render.output.as_deref(), &document.render(&body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hexapawn::Player;

    #[test]
    fn last_move_line_ends_with_white_win() {
        let boards = play_line(Pick::Last).unwrap();
        assert_eq!(boards.len(), 6);
        let last = boards.last().unwrap();
        assert_eq!(last.ply(), 6);
        assert_eq!(last.winner(), Some(Player::White));
    }

    #[test]
    fn first_move_line_blocks_black() {
        let boards = play_line(Pick::First).unwrap();
        assert_eq!(boards.len(), 4);
        let last = boards.last().unwrap();
        assert_eq!(last.turn(), Player::Black);
        assert!(last.legal_moves().is_empty());
        assert_eq!(last.winner(), Some(Player::White));
    }
}
