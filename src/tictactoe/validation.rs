//! Building and validating game states from literal board snapshots

use serde::{Deserialize, Serialize};

use super::{
    board::{Board, Player, Position},
    game::{GameState, check_status},
    lines::LineAnalyzer,
};
use crate::error::Error;

/// Serialized form of a [`GameState`]: the moves in the order played
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct GameRecord {
    moves: Vec<Position>,
}

impl From<GameState> for GameRecord {
    fn from(state: GameState) -> Self {
        GameRecord {
            moves: state.move_history,
        }
    }
}

impl TryFrom<GameRecord> for GameState {
    type Error = Error;

    fn try_from(record: GameRecord) -> crate::Result<Self> {
        record
            .moves
            .into_iter()
            .try_fold(GameState::initial(), |state, mv| state.apply_move(mv))
    }
}

impl GameState {
    /// Reconstruct a state from a board snapshot (for example a UI board).
    ///
    /// The side to move is inferred from the piece counts with X moving
    /// first. The move history is a plausible replay order: X and O pieces
    /// alternate, each in row-major order.
    ///
    /// # Errors
    ///
    /// Returns error if the piece counts are impossible, both players own a
    /// line, a winner's lines could not have been completed by a single
    /// final move, or the recorded winner did not move last.
    pub fn from_board(board: Board) -> crate::Result<GameState> {
        let count = board.count_pieces();
        let current_player = if count.x == count.o {
            Player::X
        } else if count.x == count.o + 1 {
            Player::O
        } else {
            return Err(Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            });
        };

        let x_wins = LineAnalyzer::has_won(board.cells(), Player::X);
        let o_wins = LineAnalyzer::has_won(board.cells(), Player::O);
        let invalid = |reason: &str| Error::InvalidConfiguration {
            message: format!("impossible board '{}': {reason}", board.serialize()),
        };

        if x_wins && o_wins {
            return Err(invalid("both players cannot have winning lines"));
        }
        if x_wins && current_player != Player::O {
            return Err(invalid("X won, so X must have moved last"));
        }
        if o_wins && current_player != Player::X {
            return Err(invalid("O won, so O must have moved last"));
        }
        for player in [Player::X, Player::O] {
            if !winning_lines_share_cell(&board, player) {
                return Err(invalid("winning lines must share the final move's cell"));
            }
        }

        let mut x_moves = Vec::with_capacity(count.x);
        let mut o_moves = Vec::with_capacity(count.o);
        for pos in Position::ALL {
            match board.get(pos).and_then(|cell| cell.to_player()) {
                Some(Player::X) => x_moves.push(pos),
                Some(Player::O) => o_moves.push(pos),
                None => {}
            }
        }
        let mut move_history = Vec::with_capacity(count.x + count.o);
        for (i, x) in x_moves.into_iter().enumerate() {
            move_history.push(x);
            if let Some(&o) = o_moves.get(i) {
                move_history.push(o);
            }
        }

        Ok(GameState {
            board,
            current_player,
            status: check_status(&board),
            ply_depth: move_history.len(),
            move_history,
        })
    }

    /// Parse a board string and validate it, see [`Board::from_string`]
    pub fn from_string(s: &str) -> crate::Result<GameState> {
        Self::from_board(Board::from_string(s)?)
    }

    /// Check the structural invariants that every reachable state satisfies
    pub fn is_consistent(&self) -> bool {
        let occupied = self.board.occupied_count();
        self.ply_depth == self.move_history.len()
            && self.ply_depth == occupied
            && self.status == check_status(&self.board)
            && self.current_player
                == if occupied.is_multiple_of(2) {
                    Player::X
                } else {
                    Player::O
                }
    }
}

/// All of a player's completed lines must share a cell, otherwise the
/// position required a move after the game had already ended
fn winning_lines_share_cell(board: &Board, player: Player) -> bool {
    let lines: Vec<&[usize; 3]> = LineAnalyzer::lines_owned_by(board.cells(), player).collect();
    if lines.len() < 2 {
        return true;
    }
    (0..9).any(|idx| lines.iter().all(|line| line.contains(&idx)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::GameStatus;

    #[test]
    fn test_from_board_infers_mover() {
        let state = GameState::from_string("X../.O./...").unwrap();
        assert_eq!(state.current_player(), Player::X);
        assert_eq!(state.ply_depth(), 2);
        assert!(state.is_consistent());

        let state = GameState::from_string("X../.../...").unwrap();
        assert_eq!(state.current_player(), Player::O);
    }

    #[test]
    fn test_from_board_rejects_bad_counts() {
        assert!(matches!(
            GameState::from_string("XX./.../..."),
            Err(Error::InvalidPieceCounts { x_count: 2, o_count: 0 })
        ));
        assert!(GameState::from_string("O../.../...").is_err());
    }

    #[test]
    fn test_from_board_rejects_double_winner() {
        assert!(GameState::from_string("XXX/OOO/...").is_err());
    }

    #[test]
    fn test_from_board_rejects_disjoint_double_line() {
        // X X X
        // O O .
        // X X X  (needs a move after the first line was complete)
        let board = Board::from_string("XXX/OO./XXX").unwrap();
        assert!(GameState::from_board(board).is_err());
    }

    #[test]
    fn test_from_board_accepts_shared_double_line() {
        // X X X
        // X O O
        // X O O  is reachable: the last X at (0,0) completes both lines
        let state = GameState::from_string("XXX/XOO/XOO").unwrap();
        assert_eq!(state.status(), GameStatus::XWins);
        assert!(state.is_consistent());
    }

    #[test]
    fn test_serde_round_trip_replays_moves() {
        let state = GameState::initial()
            .apply_move(Position::CENTER)
            .and_then(|s| s.apply_move(Position::new(0, 0)))
            .unwrap();
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(
            json,
            r#"{"moves":[{"row":1,"col":1},{"row":0,"col":0}]}"#
        );
        let loaded: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, state);
    }

    #[test]
    fn test_deserialize_rejects_illegal_replay() {
        // second move lands on the occupied center
        let repeated = r#"{"moves":[{"row":1,"col":1},{"row":1,"col":1}]}"#;
        assert!(serde_json::from_str::<GameState>(repeated).is_err());

        // move after X completed the top row
        let after_win = r#"{"moves":[
            {"row":0,"col":0},{"row":1,"col":0},{"row":0,"col":1},
            {"row":1,"col":1},{"row":0,"col":2},{"row":2,"col":2}]}"#;
        assert!(serde_json::from_str::<GameState>(after_win).is_err());

        let off_board = r#"{"moves":[{"row":3,"col":0}]}"#;
        assert!(serde_json::from_str::<GameState>(off_board).is_err());
    }

    #[test]
    fn test_history_replays_to_same_board() {
        let state = GameState::from_string("XOX/.O./X..").unwrap();
        let replayed = state
            .move_history()
            .iter()
            .try_fold(Board::empty(), |board, pos| {
                let idx = pos.checked_index()?;
                let mover = if board.occupied_count().is_multiple_of(2) {
                    Player::X
                } else {
                    Player::O
                };
                Some(board.with_cell(idx, mover.to_cell()))
            })
            .unwrap();
        assert_eq!(&replayed, state.board());
    }
}
