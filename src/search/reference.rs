//! Plain minimax without pruning, used to check the pruned searches

use std::collections::HashMap;

use crate::tictactoe::{Board, GameState, Player};

/// Memoized full-width minimax keyed by the literal board.
///
/// No pruning and no symmetry folding: every legal move of every position
/// is scored exactly.
#[derive(Debug, Default)]
pub struct ReferenceSolver {
    memo: HashMap<Board, i32>,
}

impl ReferenceSolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact value of `state` from X's point of view
    pub fn value(&mut self, state: &GameState) -> i32 {
        if let Some(&value) = self.memo.get(state.board()) {
            return value;
        }

        let value = if state.is_terminal() {
            state.terminal_value(Player::X)
        } else {
            let children = state.legal_moves().into_iter().map(|mv| state.successor(mv));
            let values: Vec<i32> = children.map(|child| self.value(&child)).collect();
            match state.current_player() {
                Player::X => values.into_iter().max().unwrap_or(0),
                Player::O => values.into_iter().min().unwrap_or(0),
            }
        };

        self.memo.insert(*state.board(), value);
        value
    }

    /// Number of distinct boards solved so far
    pub fn len(&self) -> usize {
        self.memo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.memo.is_empty()
    }
}

/// Exact minimax value of `state` with a fresh solver
pub fn minimax_value(state: &GameState) -> i32 {
    ReferenceSolver::new().value(state)
}
