//! Difficulty tiers and move selection

use std::fmt;

use clap::ValueEnum;
use rand::{SeedableRng, random, rngs::StdRng, seq::IndexedRandom};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::{INF, depth_limited::DepthLimitedSearch};
use crate::{
    config::EngineConfig,
    error::Error,
    tictactoe::{GameState, Player, Position},
};

/// Playing strength
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Weighted random: center 3, corners 2, edges 1
    Easy,
    /// Shallow search (5 plies including the root move)
    Medium,
    /// Search to the end of the game
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(text)
    }
}

/// Move selector owning its configuration and random source.
///
/// # Examples
///
/// ```
/// use noughts::config::EngineConfig;
/// use noughts::search::{Difficulty, Engine};
/// use noughts::tictactoe::{GameState, Position};
///
/// let mut engine = Engine::new(EngineConfig::default().with_seed(1)).unwrap();
/// let state = GameState::from_string("XX./OO./...").unwrap();
/// let mv = engine.best_move(&state, Difficulty::Medium).unwrap();
/// assert_eq!(mv, Position::new(0, 2));
/// ```
#[derive(Debug)]
pub struct Engine {
    config: EngineConfig,
    rng: StdRng,
}

impl Engine {
    /// # Errors
    ///
    /// Returns error if the configuration fails validation.
    pub fn new(config: EngineConfig) -> crate::Result<Self> {
        config.validate()?;
        let rng = StdRng::seed_from_u64(config.seed.unwrap_or_else(random));
        Ok(Self { config, rng })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Pick a move for the side to move.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoLegalMoves`] on a terminal state.
    #[instrument(skip(self, state), fields(ply = state.ply_depth(), player = %state.current_player()))]
    pub fn best_move(&mut self, state: &GameState, difficulty: Difficulty) -> crate::Result<Position> {
        if state.is_terminal() {
            return Err(Error::NoLegalMoves);
        }
        let chosen = match difficulty {
            Difficulty::Easy => self.sample_easy(state)?,
            Difficulty::Medium => select_best(state, self.config.medium_depth)?,
            Difficulty::Hard => select_best(state, self.config.hard_depth)?,
        };
        debug!(%chosen, "move selected");
        Ok(chosen)
    }

    /// Weighted draw over the ordered moves; falls back to a uniform pick
    /// when every remaining cell has weight zero
    fn sample_easy(&mut self, state: &GameState) -> crate::Result<Position> {
        let weights = self.config.easy_weights;
        let moves = state.ordered_legal_moves();
        match moves.choose_weighted(&mut self.rng, |&mv| weights.weight_for(mv)) {
            Ok(&mv) => Ok(mv),
            Err(_) => moves.choose(&mut self.rng).copied().ok_or(Error::NoLegalMoves),
        }
    }
}

/// Select a move with the default configuration.
///
/// Easy play draws from OS entropy; use [`Engine`] with a seed for
/// reproducible games.
pub fn best_move(state: &GameState, difficulty: Difficulty) -> crate::Result<Position> {
    Engine::new(EngineConfig::default())?.best_move(state, difficulty)
}

/// Value of every root move in `ordered_legal_moves` order, each searched
/// `remaining` plies below the move. One table serves all root moves.
///
/// # Errors
///
/// Returns [`Error::NoLegalMoves`] on a terminal state.
pub fn score_moves(state: &GameState, remaining: u8) -> crate::Result<Vec<(Position, i32)>> {
    if state.is_terminal() {
        return Err(Error::NoLegalMoves);
    }
    let mut search = DepthLimitedSearch::new();
    let scored: Vec<(Position, i32)> = state
        .ordered_legal_moves()
        .into_iter()
        .map(|mv| (mv, search.search(&state.successor(mv), remaining, -INF, INF)))
        .collect();
    let stats = search.stats();
    debug!(
        nodes = stats.nodes,
        cutoffs = stats.cutoffs,
        table_hits = stats.table_hits,
        remaining,
        "root moves scored"
    );
    Ok(scored)
}

/// Best-scoring move for the side to move; the earliest move wins ties
fn select_best(state: &GameState, remaining: u8) -> crate::Result<Position> {
    let better = |candidate: i32, best: i32| match state.current_player() {
        Player::X => candidate > best,
        Player::O => candidate < best,
    };
    score_moves(state, remaining)?
        .into_iter()
        .reduce(|best, cand| if better(cand.1, best.1) { cand } else { best })
        .map(|(mv, _)| mv)
        .ok_or(Error::NoLegalMoves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EasyWeights;

    fn engine() -> Engine {
        Engine::new(EngineConfig::default().with_seed(42)).unwrap()
    }

    #[test]
    fn test_terminal_state_has_no_move() {
        let state = GameState::from_string("XXX/OO./...").unwrap();
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert!(matches!(
                engine().best_move(&state, difficulty),
                Err(Error::NoLegalMoves)
            ));
        }
    }

    #[test]
    fn test_hard_answers_corner_with_corner() {
        // X at (0,0), O at (1,1), X to move
        let state = GameState::from_string("X../.O./...").unwrap();
        let mv = engine().best_move(&state, Difficulty::Hard).unwrap();
        assert!(mv.is_corner(), "expected a corner, got {mv}");
    }

    #[test]
    fn test_medium_and_hard_take_immediate_win() {
        let state = GameState::from_string("XX./OO./...").unwrap();
        for difficulty in [Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(
                engine().best_move(&state, difficulty).unwrap(),
                Position::new(0, 2)
            );
        }
    }

    #[test]
    fn test_o_blocks_or_wins_when_minimizing() {
        // O to move; O can win at (1,2)
        let state = GameState::from_string("XX./OO./X..").unwrap();
        let mv = engine().best_move(&state, Difficulty::Hard).unwrap();
        assert_eq!(mv, Position::new(1, 2));
    }

    #[test]
    fn test_easy_only_returns_legal_moves() {
        let mut engine = engine();
        let state = GameState::from_string("XO./.X./..O").unwrap();
        for _ in 0..50 {
            let mv = engine.best_move(&state, Difficulty::Easy).unwrap();
            assert!(state.legal_moves().contains(&mv));
        }
    }

    #[test]
    fn test_easy_is_reproducible_with_seed() {
        let state = GameState::initial();
        let a: Vec<Position> = {
            let mut e = engine();
            (0..10).map(|_| e.best_move(&state, Difficulty::Easy).unwrap()).collect()
        };
        let b: Vec<Position> = {
            let mut e = engine();
            (0..10).map(|_| e.best_move(&state, Difficulty::Easy).unwrap()).collect()
        };
        assert_eq!(a, b);
    }

    #[test]
    fn test_easy_favours_center() {
        let mut engine = engine();
        let state = GameState::initial();
        let mut center = 0;
        let mut edge = 0;
        for _ in 0..2000 {
            let mv = engine.best_move(&state, Difficulty::Easy).unwrap();
            if mv.is_center() {
                center += 1;
            } else if mv.is_edge() {
                edge += 1;
            }
        }
        // expected 3/15 center vs 1/15 per edge cell
        assert!(center > edge / 4 * 2, "center={center} edge={edge}");
        assert!(center > 250, "center={center}");
    }

    #[test]
    fn test_easy_never_picks_zero_weight_cells() {
        let weights = EasyWeights {
            center: 1,
            corner: 1,
            edge: 0,
        };
        let mut engine =
            Engine::new(EngineConfig::default().with_seed(3).with_easy_weights(weights)).unwrap();
        let state = GameState::initial();
        for _ in 0..200 {
            let mv = engine.best_move(&state, Difficulty::Easy).unwrap();
            assert!(!mv.is_edge(), "picked edge {mv}");
        }
    }

    #[test]
    fn test_easy_falls_back_when_remaining_weights_are_zero() {
        let weights = EasyWeights {
            center: 1,
            corner: 0,
            edge: 0,
        };
        let mut engine =
            Engine::new(EngineConfig::default().with_seed(3).with_easy_weights(weights)).unwrap();
        let state = GameState::initial().apply_move(Position::CENTER).unwrap();
        for _ in 0..20 {
            let mv = engine.best_move(&state, Difficulty::Easy).unwrap();
            assert!(state.legal_moves().contains(&mv));
        }
    }
}
