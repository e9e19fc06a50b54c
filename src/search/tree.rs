//! Exhaustive game-tree construction with alpha-beta pruning
//!
//! Nodes live in an arena owned by [`GameTree`]; children are indices and the
//! parent link is a plain index used only for upward traversal.

use tracing::{debug, instrument};

use super::{
    INF, SearchStats,
    transposition::{Bound, TranspositionTable},
};
use crate::tictactoe::{GameState, Player};

/// Index of a node inside its [`GameTree`]
pub type NodeId = usize;

/// One visited position
#[derive(Debug, Clone)]
pub struct SearchNode {
    pub state: GameState,
    /// Visited children in visitation order, up to and including any
    /// cutoff child
    pub children: Vec<NodeId>,
    pub parent: Option<NodeId>,
    /// Minimax value from X's point of view
    pub value: i32,
    /// How `value` relates to the true minimax value
    pub bound: Bound,
    /// Window the node was entered with
    pub alpha: i32,
    pub beta: i32,
}

/// A fully built search tree rooted at [`GameTree::ROOT`]
#[derive(Debug, Clone)]
pub struct GameTree {
    nodes: Vec<SearchNode>,
    stats: SearchStats,
}

/// (canonical key, mover, ply from the initial position)
type ExhaustiveKey = (String, Player, usize);

impl GameTree {
    pub const ROOT: NodeId = 0;

    pub fn root(&self) -> &SearchNode {
        &self.nodes[Self::ROOT]
    }

    /// Minimax value of the root position
    pub fn root_value(&self) -> i32 {
        self.root().value
    }

    pub fn get(&self, id: NodeId) -> Option<&SearchNode> {
        self.nodes.get(id)
    }

    /// Children of `id` in visitation order
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = (NodeId, &SearchNode)> + '_ {
        self.nodes
            .get(id)
            .map(|node| node.children.as_slice())
            .unwrap_or_default()
            .iter()
            .map(|&child| (child, &self.nodes[child]))
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).and_then(|node| node.parent)
    }

    /// All nodes in creation order (depth-first preorder)
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SearchNode)> + '_ {
        self.nodes.iter().enumerate()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Nodes without children: terminal positions and table hits
    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.children.is_empty()).count()
    }

    /// Deepest ply below the root
    pub fn max_depth(&self) -> usize {
        let base = self.root().state.ply_depth();
        self.nodes
            .iter()
            .map(|n| n.state.ply_depth() - base)
            .max()
            .unwrap_or(0)
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}

/// Build the complete tree from the initial position
pub fn build_game_tree() -> GameTree {
    build_game_tree_from(&GameState::initial())
}

/// Build the complete tree below `root`, recursing until terminal states.
///
/// A fresh transposition table is used for every call.
#[instrument(skip_all, fields(ply = root.ply_depth()))]
pub fn build_game_tree_from(root: &GameState) -> GameTree {
    let mut builder = TreeBuilder {
        nodes: vec![SearchNode {
            state: root.clone(),
            children: Vec::new(),
            parent: None,
            value: 0,
            bound: Bound::Exact,
            alpha: -INF,
            beta: INF,
        }],
        table: TranspositionTable::new(),
        stats: SearchStats::default(),
    };

    builder.expand(GameTree::ROOT, -INF, INF);

    let mut stats = builder.stats;
    stats.table_hits = builder.table.hits();
    stats.table_entries = builder.table.len();
    debug!(
        nodes = stats.nodes,
        cutoffs = stats.cutoffs,
        table_hits = stats.table_hits,
        value = builder.nodes[GameTree::ROOT].value,
        "game tree built"
    );

    GameTree {
        nodes: builder.nodes,
        stats,
    }
}

struct TreeBuilder {
    nodes: Vec<SearchNode>,
    table: TranspositionTable<ExhaustiveKey>,
    stats: SearchStats,
}

impl TreeBuilder {
    fn expand(&mut self, id: NodeId, mut alpha: i32, mut beta: i32) -> i32 {
        self.stats.nodes += 1;
        let state = self.nodes[id].state.clone();

        if state.is_terminal() {
            let value = state.terminal_value(Player::X);
            self.nodes[id].value = value;
            self.nodes[id].bound = Bound::Exact;
            return value;
        }

        let key = (
            state.board().canonical_key(),
            state.current_player(),
            state.ply_depth(),
        );
        if let Some(value) = self.table.probe(&key, alpha, beta) {
            self.nodes[id].value = value;
            self.nodes[id].bound = Bound::classify(value, alpha, beta);
            return value;
        }

        let (alpha_orig, beta_orig) = (alpha, beta);
        let maximizing = state.current_player() == Player::X;
        let mut best = if maximizing { -INF } else { INF };

        for mv in state.ordered_legal_moves() {
            let child = self.nodes.len();
            self.nodes.push(SearchNode {
                state: state.successor(mv),
                children: Vec::new(),
                parent: Some(id),
                value: 0,
                bound: Bound::Exact,
                alpha,
                beta,
            });

            let value = self.expand(child, alpha, beta);
            self.nodes[id].children.push(child);

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
        self.nodes[id].value = best;
        self.nodes[id].bound = Bound::classify(best, alpha_orig, beta_orig);
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::{GameStatus, Position};

    #[test]
    fn test_initial_position_is_a_draw() {
        let tree = build_game_tree();
        assert_eq!(tree.root_value(), 0);
        assert!(tree.node_count() > 1);
        assert!(tree.stats().cutoffs > 0);
    }

    #[test]
    fn test_children_link_back_to_parent() {
        let tree = build_game_tree();
        for (id, node) in tree.iter() {
            for (child_id, child) in tree.children(id) {
                assert_eq!(child.parent, Some(id));
                assert_eq!(tree.parent(child_id), Some(id));
                assert_eq!(child.state.ply_depth(), node.state.ply_depth() + 1);
            }
        }
        assert_eq!(tree.parent(GameTree::ROOT), None);
    }

    #[test]
    fn test_first_children_follow_move_ordering() {
        let tree = build_game_tree();
        let (_, first) = tree.children(GameTree::ROOT).next().unwrap();
        assert_eq!(first.state.move_history(), &[Position::CENTER]);
    }

    #[test]
    fn test_children_are_a_prefix_of_ordered_moves() {
        let tree = build_game_tree();
        let mut truncated = 0;
        let mut unexpanded = 0;

        for (id, node) in tree.iter() {
            if node.state.is_terminal() {
                assert!(node.children.is_empty());
                continue;
            }
            let ordered = node.state.ordered_legal_moves();
            let visited: Vec<Position> = tree
                .children(id)
                .map(|(_, child)| *child.state.move_history().last().unwrap())
                .collect();
            assert!(visited.len() <= ordered.len());
            assert_eq!(visited, ordered[..visited.len()].to_vec());

            if visited.is_empty() {
                unexpanded += 1;
            } else if visited.len() < ordered.len() {
                // pruned siblings: the node failed outside its window
                truncated += 1;
                let expected = match node.state.current_player() {
                    Player::X => Bound::Lower,
                    Player::O => Bound::Upper,
                };
                assert_eq!(node.bound, expected);
            }
        }

        let stats = tree.stats();
        assert!(truncated > 0);
        assert!(truncated <= stats.cutoffs);
        assert_eq!(unexpanded, stats.table_hits);
    }

    #[test]
    fn test_terminal_root_has_no_children() {
        let state = GameState::from_string("XXX/OO./...").unwrap();
        assert_eq!(state.status(), GameStatus::XWins);
        let tree = build_game_tree_from(&state);
        assert_eq!(tree.node_count(), 1);
        assert_eq!(tree.root_value(), 1);
        assert_eq!(tree.max_depth(), 0);
    }

    #[test]
    fn test_forced_o_win_is_found() {
        // O to move can complete the middle column
        let state = GameState::from_string("XOX/.O./X..").unwrap();
        let tree = build_game_tree_from(&state);
        assert_eq!(tree.root_value(), -1);
    }
}
