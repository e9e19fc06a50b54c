//! Strategy extraction: a per-position lookup table of recommended moves

use std::{collections::BTreeMap, path::Path};

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::{
    transposition::Bound,
    tree::{GameTree, SearchNode, build_game_tree},
};
use crate::tictactoe::{GameState, Player, Position};

/// Recommended moves keyed by `"<canonical key>_<mover>"`.
///
/// Moves are stored in canonical coordinates so that one entry serves every
/// symmetric variant of a position; [`StrategyTable::lookup`] maps them back
/// onto a literal board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StrategyTable {
    entries: BTreeMap<String, Position>,
}

/// Table key for a canonical board key and the side to move
pub fn strategy_key(canonical_key: &str, mover: Player) -> String {
    format!("{canonical_key}_{mover}")
}

impl StrategyTable {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stored move in canonical coordinates
    pub fn get(&self, key: &str) -> Option<Position> {
        self.entries.get(key).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Position)> + '_ {
        self.entries.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Recommended move for `state` in the state's own coordinates
    pub fn lookup(&self, state: &GameState) -> Option<Position> {
        let form = state.board().canonical_form();
        let canonical_move = self.get(&strategy_key(&form.key, state.current_player()))?;
        Some(form.map_to_original(canonical_move))
    }

    pub fn to_json_string(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_json(&self, path: &Path) -> crate::Result<()> {
        std::fs::write(path, self.to_json_string()?).map_err(|source| crate::Error::Io {
            operation: format!("write strategy table {}", path.display()),
            source,
        })
    }

    pub fn read_json(path: &Path) -> crate::Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| crate::Error::Io {
            operation: format!("read strategy table {}", path.display()),
            source,
        })?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// Walk `tree` depth-first and record, for each non-terminal node, the move
/// to its first child that is provably optimal for the mover.
///
/// Inside pruned subtrees many values are only bounds, so a node may prove
/// no child optimal and then records nothing. The first node visited that
/// does prove a move decides the entry for its key.
#[instrument(skip_all, fields(nodes = tree.node_count()))]
pub fn extract_strategy(tree: &GameTree) -> StrategyTable {
    let mut table = StrategyTable::default();
    let mut stack = vec![GameTree::ROOT];

    while let Some(id) = stack.pop() {
        let Some(node) = tree.get(id) else {
            continue;
        };
        if node.state.is_terminal() {
            continue;
        }

        let best_child = tree
            .children(id)
            .map(|(_, child)| child)
            .find(|child| proves_optimal(node, child));

        if let Some(child) = best_child {
            let board = node.state.board();
            if let Some(mv) = board.find_changed_position(child.state.board()) {
                let form = board.canonical_form();
                table
                    .entries
                    .entry(strategy_key(&form.key, node.state.current_player()))
                    .or_insert_with(|| form.map_to_canonical(mv));
            }
        }

        stack.extend(node.children.iter().rev());
    }

    debug!(entries = table.len(), "strategy extracted");
    table
}

/// Whether moving from `parent` into `child` keeps the parent's true value.
///
/// Values lie in `-1..=1`. For X the child's value must be a floor on its
/// true value that reaches the ceiling on the parent's; O mirrors this.
fn proves_optimal(parent: &SearchNode, child: &SearchNode) -> bool {
    match parent.state.current_player() {
        Player::X => {
            let ceiling = match parent.bound {
                Bound::Lower => 1,
                Bound::Exact | Bound::Upper => parent.value,
            };
            child.bound != Bound::Upper && child.value >= ceiling
        }
        Player::O => {
            let floor = match parent.bound {
                Bound::Upper => -1,
                Bound::Exact | Bound::Lower => parent.value,
            };
            child.bound != Bound::Lower && child.value <= floor
        }
    }
}

/// Build the full tree from the initial position and extract its strategy
pub fn calculate_optimal_strategy() -> StrategyTable {
    extract_strategy(&build_game_tree())
}
