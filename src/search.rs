//! Alpha-beta search over Tic-Tac-Toe positions
//!
//! Values are always from X's point of view: +1 X wins, 0 draw, -1 O wins.
//! X maximizes, O minimizes.

use serde::Serialize;

pub mod depth_limited;
pub mod policy;
pub mod reference;
pub mod strategy;
pub mod transposition;
pub mod tree;

pub use depth_limited::{DepthLimitedSearch, search_to_depth};
pub use policy::{Difficulty, Engine, best_move, score_moves};
pub use reference::{ReferenceSolver, minimax_value};
pub use strategy::{StrategyTable, calculate_optimal_strategy, extract_strategy};
pub use transposition::{Bound, TranspositionTable};
pub use tree::{GameTree, NodeId, SearchNode, build_game_tree, build_game_tree_from};

/// Window bound standing in for infinity
pub const INF: i32 = i32::MAX;

/// Counters collected during one top-level search call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Nodes entered, including terminal leaves and table hits
    pub nodes: usize,
    /// Sibling lists abandoned because `beta <= alpha`
    pub cutoffs: usize,
    /// Table probes that produced a usable value
    pub table_hits: usize,
    /// Entries in the table when the search finished
    pub table_entries: usize,
}
