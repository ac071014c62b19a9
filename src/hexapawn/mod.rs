//! Hexapawn rules, game tree and position catalog

pub mod board;
pub mod catalog;
pub mod games;
pub mod symmetry;

pub use board::{Board, MAX_PLY, Move, Pawn, Player, SIZE};
pub use catalog::Catalog;
pub use games::{Games, Node, NodeId, TreeStats};
