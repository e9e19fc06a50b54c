//! Depth-limited alpha-beta search used for bounded-strength play

use super::{INF, SearchStats, transposition::TranspositionTable};
use crate::tictactoe::{GameState, Player};

/// (canonical key, remaining depth budget)
type DepthKey = (String, u8);

/// One top-level depth-limited search and the table it owns.
///
/// Scores are only shared between nodes searched with the same remaining
/// budget, so one instance may serve several root moves of a single
/// decision but must not outlive it.
#[derive(Debug, Default)]
pub struct DepthLimitedSearch {
    table: TranspositionTable<DepthKey>,
    stats: SearchStats,
}

impl DepthLimitedSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Minimax value of `state` looking at most `remaining` plies ahead.
    ///
    /// Leaves where the budget runs out before the game ends score with
    /// [`GameState::heuristic_value`].
    pub fn search(&mut self, state: &GameState, remaining: u8, mut alpha: i32, mut beta: i32) -> i32 {
        self.stats.nodes += 1;

        if remaining == 0 || state.is_terminal() {
            return state.heuristic_value();
        }

        let key = (state.board().canonical_key(), remaining);
        if let Some(value) = self.table.probe(&key, alpha, beta) {
            return value;
        }

        let (alpha_orig, beta_orig) = (alpha, beta);
        let maximizing = state.current_player() == Player::X;
        let mut best = if maximizing { -INF } else { INF };

        for mv in state.ordered_legal_moves() {
            let value = self.search(&state.successor(mv), remaining - 1, alpha, beta);
            if maximizing {
                best = best.max(value);
                alpha = alpha.max(value);
            } else {
                best = best.min(value);
                beta = beta.min(value);
            }
            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        self.table.store(key, best, alpha_orig, beta_orig);
        best
    }

    pub fn stats(&self) -> SearchStats {
        SearchStats {
            table_hits: self.table.hits(),
            table_entries: self.table.len(),
            ..self.stats
        }
    }
}

/// Value of `state` with a full window and a fresh table
pub fn search_to_depth(state: &GameState, remaining: u8) -> i32 {
    DepthLimitedSearch::new().search(state, remaining, -INF, INF)
}
