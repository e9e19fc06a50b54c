//! Tic-Tac-Toe board geometry, symmetry and rules

pub mod board;
pub mod game;
pub mod lines;
pub mod symmetry;
pub mod validation;

pub use board::{Board, Cell, Player, Position};
pub use game::{GameState, GameStatus, apply_move, check_status, initial_state, move_priority};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use symmetry::{CanonicalForm, D4Transform};
