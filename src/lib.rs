//! Hexapawn learning-aid generator
//!
//! This crate provides:
//! - The Hexapawn rules on a 3x3 board, with mirror symmetry
//! - The complete game tree and per-ply position queries
//! - The catalog of distinct positions a learning system has to answer
//! - TikZ/LaTeX rendering of that catalog for a printed learning aid

pub mod cli;
pub mod config;
pub mod error;
pub mod hexapawn;
pub mod render;

pub use config::Config;
pub use error::{Error, Result};
pub use hexapawn::{Board, Catalog, Games, Move, Pawn, Player};
