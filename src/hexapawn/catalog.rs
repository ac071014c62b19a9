//! Per-ply catalog of distinct positions a player has to answer

use std::{
    collections::{BTreeMap, HashSet},
    io,
};

use log::debug;
use serde::Serialize;

use super::{
    board::{Board, Player},
    games::Games,
};

/// Distinct non-terminal positions with `player` to move, keyed by ply.
///
/// Within a ply a position is kept only if no earlier kept position equals
/// it or its mirror image. This is the set of diagrams a learning aid needs.
#[derive(Debug, Clone)]
pub struct Catalog {
    player: Player,
    plies: BTreeMap<u32, Vec<Board>>,
}

#[derive(Debug, Serialize)]
struct CatalogRecord<'a> {
    player: &'a str,
    ply: u32,
    position: String,
    legal_moves: usize,
}

impl Catalog {
    pub fn build(games: &Games, player: Player) -> Self {
        let mut plies = BTreeMap::new();

        for (ply, boards) in games.all_player_positions(player) {
            let mut seen = HashSet::new();
            let mut kept = Vec::new();

            for board in boards {
                if board.is_terminal() || seen.contains(board) {
                    continue;
                }
                seen.insert(board.mirror());
                seen.insert(board.clone());
                kept.push(board.clone());
            }

            debug!("{player} ply {ply}: {} distinct positions", kept.len());
            if !kept.is_empty() {
                plies.insert(ply, kept);
            }
        }

        Catalog { player, plies }
    }

    pub fn player(&self) -> Player {
        self.player
    }

    /// Non-empty buckets in ascending ply order
    pub fn plies(&self) -> &BTreeMap<u32, Vec<Board>> {
        &self.plies
    }

    pub fn get(&self, ply: u32) -> &[Board] {
        self.plies.get(&ply).map(Vec::as_slice).unwrap_or_default()
    }

    /// Total number of positions over all plies
    pub fn len(&self) -> usize {
        self.plies.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.plies.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Board> {
        self.plies.values().flatten()
    }

    /// Largest number of moves any catalogued position offers
    pub fn max_legal_moves(&self) -> usize {
        self.iter()
            .map(|board| board.legal_moves().len())
            .max()
            .unwrap_or(0)
    }

    /// Write one CSV row per position: player, ply, encoded position and
    /// number of legal moves.
    ///
    /// # Errors
    ///
    /// Returns error if writing to `writer` fails.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<(), crate::Error> {
        Self::write_all_csv([self], writer)
    }

    /// Write several catalogs under a single header row
    pub fn write_all_csv<'a, W: io::Write>(
        catalogs: impl IntoIterator<Item = &'a Catalog>,
        writer: W,
    ) -> Result<(), crate::Error> {
        let mut csv = csv::Writer::from_writer(writer);
        for catalog in catalogs {
            for board in catalog.iter() {
                csv.serialize(CatalogRecord {
                    player: catalog.player.name(),
                    ply: board.ply(),
                    position: board.encode(),
                    legal_moves: board.legal_moves().len(),
                })?;
            }
        }
        csv.flush()?;
        Ok(())
    }
}
