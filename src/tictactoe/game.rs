//! Game state and rules: legal moves, transitions and scoring

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{
    board::{Board, Player, Position},
    lines::LineAnalyzer,
    validation::GameRecord,
};
use crate::error::{Error, IllegalMoveReason};

/// Outcome of the rules scan for a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    Ongoing,
    XWins,
    OWins,
    Draw,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        self != GameStatus::Ongoing
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::XWins => Some(Player::X),
            GameStatus::OWins => Some(Player::O),
            GameStatus::Ongoing | GameStatus::Draw => None,
        }
    }

    fn win_for(player: Player) -> Self {
        match player {
            Player::X => GameStatus::XWins,
            Player::O => GameStatus::OWins,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameStatus::Ongoing => "ongoing",
            GameStatus::XWins => "X wins",
            GameStatus::OWins => "O wins",
            GameStatus::Draw => "draw",
        };
        f.write_str(text)
    }
}

/// Scan rows, columns and diagonals for three in a row, else report a draw
/// on a full board, else ongoing.
///
/// This is the only place a winner is ever declared.
pub fn check_status(board: &Board) -> GameStatus {
    if let Some((owner, _)) = LineAnalyzer::winning_line(board.cells()) {
        GameStatus::win_for(owner)
    } else if board.is_full() {
        GameStatus::Draw
    } else {
        GameStatus::Ongoing
    }
}

/// Static move-ordering priority: center, then corners, then edges
pub fn move_priority(pos: Position) -> u8 {
    if pos.is_center() {
        3
    } else if pos.is_corner() {
        2
    } else {
        1
    }
}

/// Immutable snapshot of a game.
///
/// Every transition produces a new value; `ply_depth` always equals the
/// history length and the number of occupied cells. Serialized as its move
/// list, which is replayed through [`GameState::apply_move`] on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "GameRecord", try_from = "GameRecord")]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) status: GameStatus,
    pub(crate) move_history: Vec<Position>,
    pub(crate) ply_depth: usize,
}

impl GameState {
    /// Empty board, X to move
    pub fn initial() -> Self {
        GameState {
            board: Board::empty(),
            current_player: Player::X,
            status: GameStatus::Ongoing,
            move_history: Vec::new(),
            ply_depth: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn move_history(&self) -> &[Position] {
        &self.move_history
    }

    pub fn ply_depth(&self) -> usize {
        self.ply_depth
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// All empty cells in row-major order; empty iff the board is full
    pub fn legal_moves(&self) -> Vec<Position> {
        self.board.empty_positions()
    }

    /// Legal moves sorted center, corners, edges.
    ///
    /// The sort is stable so equal-priority cells keep row-major order.
    pub fn ordered_legal_moves(&self) -> Vec<Position> {
        let mut moves = self.legal_moves();
        moves.sort_by_key(|&pos| std::cmp::Reverse(move_priority(pos)));
        moves
    }

    /// Play `position` for the side to move and return the resulting state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IllegalMove`] if the game is over, the position is off
    /// the board, or the cell is occupied. `self` is never modified.
    #[must_use = "apply_move returns a new game state; the original is unchanged"]
    pub fn apply_move(&self, position: Position) -> crate::Result<GameState> {
        if self.is_terminal() {
            return Err(Error::illegal(position, IllegalMoveReason::GameOver));
        }
        if !position.is_in_bounds() {
            return Err(Error::illegal(position, IllegalMoveReason::OutOfRange));
        }
        if !self.board.is_empty_at(position) {
            return Err(Error::illegal(position, IllegalMoveReason::Occupied));
        }

        Ok(self.successor(position))
    }

    /// Transition for a move already known to be legal (search hot path).
    pub(crate) fn successor(&self, position: Position) -> GameState {
        debug_assert!(!self.is_terminal() && self.board.is_empty_at(position));
        let index = position.row * 3 + position.col;
        let board = self.board.with_cell(index, self.current_player.to_cell());
        let mut move_history = Vec::with_capacity(self.move_history.len() + 1);
        move_history.extend_from_slice(&self.move_history);
        move_history.push(position);

        GameState {
            board,
            current_player: self.current_player.opponent(),
            status: check_status(&board),
            move_history,
            ply_depth: self.ply_depth + 1,
        }
    }

    /// +1 if `perspective` won, 0 for a draw, -1 otherwise.
    ///
    /// Only meaningful on terminal states.
    pub fn terminal_value(&self, perspective: Player) -> i32 {
        debug_assert!(self.is_terminal(), "terminal_value on ongoing state");
        match self.status {
            GameStatus::Draw => 0,
            status if status.winner() == Some(perspective) => 1,
            _ => -1,
        }
    }

    /// +1 for an X win, -1 for an O win, 0 for everything else.
    ///
    /// Used at depth-limited leaves; carries no positional insight.
    pub fn heuristic_value(&self) -> i32 {
        match self.status {
            GameStatus::XWins => 1,
            GameStatus::OWins => -1,
            GameStatus::Ongoing | GameStatus::Draw => 0,
        }
    }

    /// The three cells that produced the win, for highlighting
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        LineAnalyzer::winning_line(self.board.cells())
            .map(|(_, line)| line.map(Position::from_index))
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

/// Empty board, X to move
pub fn initial_state() -> GameState {
    GameState::initial()
}

/// Free-function form of [`GameState::apply_move`]
pub fn apply_move(state: &GameState, position: Position) -> crate::Result<GameState> {
    state.apply_move(position)
}
