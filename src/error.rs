//! Error types for the hexapawn crate

use thiserror::Error;

use crate::hexapawn::Player;

/// Main error type for the hexapawn crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("move by {mover} attempted while it is {turn}'s turn")]
    WrongTurn { mover: Player, turn: Player },

    #[error("illegal move from {from:?} to {to:?}")]
    IllegalMove { from: (i8, i8), to: (i8, i8) },

    #[error("invalid board: {message}")]
    InvalidBoard { message: String },

    #[error(
        "board has {moves} legal moves but only {colors} highlight colors are configured; add colors to the palette"
    )]
    PaletteExhausted { moves: usize, colors: usize },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("template has no line containing the '{placeholder}' marker")]
    MissingPlaceholder { placeholder: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
