//! Tic-Tac-Toe engine
//!
//! This crate provides:
//! - Board geometry and D4 symmetry canonicalization
//! - Rules: legal moves, transitions, win/draw detection and scoring
//! - Alpha-beta search: exhaustive tree building and depth-limited play
//! - Difficulty-tiered move selection and strategy-table extraction
//!
//! # Examples
//!
//! ```
//! use noughts::{Difficulty, GameState, best_move};
//!
//! let state = GameState::initial();
//! let mv = best_move(&state, Difficulty::Hard).unwrap();
//! let next = state.apply_move(mv).unwrap();
//! assert_eq!(next.ply_depth(), 1);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod search;
pub mod tictactoe;

pub use config::{EasyWeights, EngineConfig};
pub use error::{Error, IllegalMoveReason, Result};
pub use search::{Difficulty, Engine, GameTree, StrategyTable, best_move, build_game_tree};
pub use tictactoe::{
    Board, Cell, GameState, GameStatus, Player, Position, apply_move, check_status, initial_state,
};
