//! Search correctness against unpruned minimax, and play-strength checks

mod common;

use noughts::{
    Difficulty, Engine, EngineConfig, GameState, Player, Position,
    search::{ReferenceSolver, build_game_tree, build_game_tree_from, score_moves, search_to_depth},
};

mod exhaustive {
    use super::*;

    #[test]
    fn empty_board_is_a_draw() {
        let tree = build_game_tree();
        assert_eq!(tree.root_value(), 0);
        assert!(tree.node_count() > 1);
    }

    #[test]
    fn tree_matches_unpruned_minimax_everywhere() {
        let mut solver = ReferenceSolver::new();
        for state in common::canonical_representatives() {
            let expected = solver.value(&state);
            let tree = build_game_tree_from(&state);
            assert_eq!(
                tree.root_value(),
                expected,
                "tree value mismatch for\n{}",
                state.board()
            );
        }
    }

    #[test]
    fn full_budget_search_matches_unpruned_minimax() {
        let mut solver = ReferenceSolver::new();
        for state in common::canonical_representatives() {
            assert_eq!(
                search_to_depth(&state, 9),
                solver.value(&state),
                "depth-limited mismatch for\n{}",
                state.board()
            );
        }
    }

    #[test]
    fn values_are_invariant_under_symmetry() {
        let mut solver = ReferenceSolver::new();
        for state in common::reachable_states() {
            let form = state.board().canonical_form();
            let canonical = GameState::from_board(form.board).unwrap();
            assert_eq!(solver.value(&state), solver.value(&canonical));
        }
    }
}

mod depth_limited {
    use super::*;

    #[test]
    fn shallow_budgets_match_brute_force() {
        for state in common::canonical_representatives() {
            for remaining in [1, 2, 4] {
                assert_eq!(
                    search_to_depth(&state, remaining),
                    common::brute_force_to_depth(&state, remaining),
                    "budget {remaining} mismatch for\n{}",
                    state.board()
                );
            }
        }
    }

    #[test]
    fn zero_budget_is_heuristic() {
        let state = GameState::from_string("XX./OO./...").unwrap();
        assert_eq!(search_to_depth(&state, 0), 0);
        let won = GameState::from_string("XXX/OO./...").unwrap();
        assert_eq!(search_to_depth(&won, 0), 1);
    }
}

mod play_strength {
    use super::*;

    fn engine() -> Engine {
        Engine::new(EngineConfig::default().with_seed(7)).unwrap()
    }

    /// Walk every line where `hard` answers with the engine and the
    /// opponent tries all legal moves; return the number of finished games.
    fn explore(engine: &mut Engine, state: &GameState, hard: Player) -> usize {
        if state.is_terminal() {
            assert_ne!(
                state.status().winner(),
                Some(hard.opponent()),
                "hard engine lost:\n{}",
                state.board()
            );
            return 1;
        }
        if state.current_player() == hard {
            let mv = engine.best_move(state, Difficulty::Hard).unwrap();
            let next = state.apply_move(mv).unwrap();
            explore(engine, &next, hard)
        } else {
            state
                .legal_moves()
                .into_iter()
                .map(|mv| explore(engine, &state.apply_move(mv).unwrap(), hard))
                .sum()
        }
    }

    #[test]
    fn hard_never_loses_as_x() {
        let mut engine = engine();
        let games = explore(&mut engine, &GameState::initial(), Player::X);
        assert!(games > 0);
    }

    #[test]
    fn hard_never_loses_as_o() {
        let mut engine = engine();
        let games = explore(&mut engine, &GameState::initial(), Player::O);
        assert!(games > 0);
    }

    #[test]
    fn hard_answers_corner_with_center() {
        let state = GameState::initial().apply_move(Position::new(0, 0)).unwrap();
        let mut engine = engine();
        assert_eq!(
            engine.best_move(&state, Difficulty::Hard).unwrap(),
            Position::CENTER
        );
    }

    #[test]
    fn medium_and_hard_take_immediate_win() {
        let state = GameState::from_string("XX./OO./...").unwrap();
        let mut engine = engine();
        for difficulty in [Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(
                engine.best_move(&state, difficulty).unwrap(),
                Position::new(0, 2)
            );
        }
    }

    #[test]
    fn hard_blocks_open_line() {
        // X threatens the top row; O must block
        let state = GameState::from_string("XX./.O./...").unwrap();
        let mut engine = engine();
        assert_eq!(
            engine.best_move(&state, Difficulty::Hard).unwrap(),
            Position::new(0, 2)
        );
    }

    #[test]
    fn scores_cover_every_legal_move() {
        let state = GameState::from_string("X../.O./...").unwrap();
        let scores = score_moves(&state, 8).unwrap();
        assert_eq!(scores.len(), state.legal_moves().len());
        let best = scores.iter().map(|&(_, v)| v).max().unwrap();
        assert_eq!(best, 0);
    }

    #[test]
    fn easy_plays_complete_games() {
        let mut engine = engine();
        for _ in 0..20 {
            let mut state = GameState::initial();
            while !state.is_terminal() {
                let mv = engine.best_move(&state, Difficulty::Easy).unwrap();
                state = state.apply_move(mv).unwrap();
            }
            assert!(state.ply_depth() >= 5);
        }
    }
}
