//! CLI infrastructure for the hexapawn learning-aid generator
//!
//! This module provides the command-line interface for cataloguing positions,
//! drawing sample games and inspecting the game tree.

pub mod commands;
pub mod output;
