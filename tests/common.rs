//! Common test utilities for the noughts test suite.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet, VecDeque};

use noughts::{GameState, Player};

/// Every state reachable from the empty board, one per distinct board
pub fn reachable_states() -> Vec<GameState> {
    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();
    let mut states = Vec::new();

    let root = GameState::initial();
    visited.insert(*root.board());
    queue.push_back(root);

    while let Some(state) = queue.pop_front() {
        if !state.is_terminal() {
            for pos in state.legal_moves() {
                let next = state.apply_move(pos).expect("legal move");
                if visited.insert(*next.board()) {
                    queue.push_back(next);
                }
            }
        }
        states.push(state);
    }

    states
}

/// One reachable state per canonical key
pub fn canonical_representatives() -> Vec<GameState> {
    let mut seen = HashMap::new();
    for state in reachable_states() {
        seen.entry(state.board().canonical_key()).or_insert(state);
    }
    let mut states: Vec<GameState> = seen.into_values().collect();
    states.sort_by_key(|s| (s.ply_depth(), s.board().serialize()));
    states
}

/// Depth-limited minimax with no pruning and no table
pub fn brute_force_to_depth(state: &GameState, remaining: u8) -> i32 {
    if remaining == 0 || state.is_terminal() {
        return state.heuristic_value();
    }
    let values = state.legal_moves().into_iter().map(|mv| {
        let next = state.apply_move(mv).expect("legal move");
        brute_force_to_depth(&next, remaining - 1)
    });
    match state.current_player() {
        Player::X => values.max().expect("non-terminal state has moves"),
        Player::O => values.min().expect("non-terminal state has moves"),
    }
}
