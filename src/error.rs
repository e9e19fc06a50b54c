//! Error types for the noughts engine

use std::fmt;

use thiserror::Error;

use crate::tictactoe::Position;

/// Why a move was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMoveReason {
    /// Row or column outside `0..3`
    OutOfRange,
    /// Target cell already holds a piece
    Occupied,
    /// The game has already been decided
    GameOver,
}

impl fmt::Display for IllegalMoveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            IllegalMoveReason::OutOfRange => "out of range",
            IllegalMoveReason::Occupied => "already occupied",
            IllegalMoveReason::GameOver => "game already over",
        };
        f.write_str(text)
    }
}

/// Main error type for the noughts crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("illegal move at {position}: {reason}")]
    IllegalMove {
        position: Position,
        reason: IllegalMoveReason,
    },

    #[error("no legal moves available")]
    NoLegalMoves,

    #[error("wrong board length: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at cell {index} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        index: usize,
        context: String,
    },

    #[error("invalid piece counts: X={x_count}, O={o_count} (must be equal or X ahead by 1)")]
    InvalidPieceCounts { x_count: usize, o_count: usize },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn illegal(position: Position, reason: IllegalMoveReason) -> Self {
        Error::IllegalMove { position, reason }
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
