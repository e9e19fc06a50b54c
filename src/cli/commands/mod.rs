//! Subcommand implementations

pub mod best_move;
pub mod play;
pub mod strategy;
pub mod symmetry;
pub mod tree;

use anyhow::{Result, anyhow};

use crate::tictactoe::GameState;

/// Parse a `--board` argument, defaulting to the empty board
pub(crate) fn parse_state(board: Option<&str>) -> Result<GameState> {
    match board {
        Some(s) => {
            GameState::from_string(s).map_err(|e| anyhow!("invalid --board '{s}': {e}"))
        }
        None => Ok(GameState::initial()),
    }
}
