//! Board representation and pure geometric operations

use std::fmt;

use serde::{Deserialize, Serialize};

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    /// Character used when rendering the board for humans
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    /// Symbol used in the serialized key.
    ///
    /// Digits keep the ordering `Empty < X < O`, which decides which member
    /// of a symmetry orbit is canonical.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '0',
            Cell::X => '1',
            Cell::O => '2',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '-' | '0' => Some(Cell::Empty),
            'X' | 'x' | '1' => Some(Cell::X),
            'O' | 'o' | '2' => Some(Cell::O),
            _ => None,
        }
    }

    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => f.write_str("X"),
            Player::O => f.write_str("O"),
        }
    }
}

/// A (row, column) coordinate on the board.
///
/// Coordinates are not range-checked on construction so that callers can
/// pass through user input; [`Position::checked_index`] and the rules engine
/// reject anything outside `0..3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const CENTER: Position = Position::new(1, 1);

    /// All nine cells in row-major order
    pub const ALL: [Position; 9] = [
        Position::new(0, 0),
        Position::new(0, 1),
        Position::new(0, 2),
        Position::new(1, 0),
        Position::new(1, 1),
        Position::new(1, 2),
        Position::new(2, 0),
        Position::new(2, 1),
        Position::new(2, 2),
    ];

    pub const fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    /// Position for a row-major cell index (0-8)
    pub const fn from_index(index: usize) -> Self {
        Position {
            row: index / 3,
            col: index % 3,
        }
    }

    pub fn is_in_bounds(self) -> bool {
        self.row < 3 && self.col < 3
    }

    /// Row-major cell index, or `None` when off the board
    pub fn checked_index(self) -> Option<usize> {
        self.is_in_bounds().then_some(self.row * 3 + self.col)
    }

    pub fn is_center(self) -> bool {
        self == Self::CENTER
    }

    pub fn is_corner(self) -> bool {
        self.is_in_bounds() && self.row != 1 && self.col != 1
    }

    pub fn is_edge(self) -> bool {
        self.is_in_bounds() && !self.is_center() && !self.is_corner()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A 3x3 grid of cells.
///
/// Boards are plain values: every operation that "changes" a board returns a
/// fresh copy and leaves the receiver untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PieceCount {
    pub x: usize,
    pub o: usize,
    pub empty: usize,
}

impl Board {
    /// Board with every cell empty
    pub fn empty() -> Self {
        Board {
            cells: [Cell::Empty; 9],
        }
    }

    /// Build a board from row-major cells
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Board { cells }
    }

    pub fn from_rows(rows: [[Cell; 3]; 3]) -> Self {
        let mut cells = [Cell::Empty; 9];
        for (row, line) in rows.iter().enumerate() {
            for (col, &cell) in line.iter().enumerate() {
                cells[row * 3 + col] = cell;
            }
        }
        Board { cells }
    }

    /// Parse a board from nine cell symbols.
    ///
    /// Whitespace and `/` separators are ignored, so `"X.O/.X./..O"` and
    /// `"102010002"` both parse.
    ///
    /// # Errors
    ///
    /// Returns error if there are not exactly nine symbols or any symbol is
    /// not a recognised cell.
    pub fn from_string(s: &str) -> crate::Result<Self> {
        let symbols: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .collect();
        if symbols.len() != 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: symbols.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (index, &c) in symbols.iter().enumerate() {
            cells[index] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                index,
                context: s.to_string(),
            })?;
        }

        Ok(Board { cells })
    }

    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Cell at a position; off-board positions read as `None`
    pub fn get(&self, pos: Position) -> Option<Cell> {
        pos.checked_index().map(|idx| self.cells[idx])
    }

    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.get(pos) == Some(Cell::Empty)
    }

    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// All empty positions in row-major order
    pub fn empty_positions(&self) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| Position::from_index(i))
            .collect()
    }

    pub(crate) fn count_pieces(&self) -> PieceCount {
        let mut count = PieceCount {
            x: 0,
            o: 0,
            empty: 0,
        };
        for cell in &self.cells {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => count.empty += 1,
            }
        }
        count
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        9 - self.count_pieces().empty
    }

    /// Copy of this board with one cell replaced.
    ///
    /// Callers must pass an in-bounds position.
    #[must_use = "with_cell returns a new board; the original is unchanged"]
    pub(crate) fn with_cell(&self, index: usize, cell: Cell) -> Self {
        let mut next = *self;
        next.cells[index] = cell;
        next
    }

    /// Rotate 90° clockwise: the cell at (i, j) moves to (j, 2 - i)
    #[must_use = "rotate90 returns a new board; the original is unchanged"]
    pub fn rotate90(&self) -> Self {
        let mut rotated = [Cell::Empty; 9];
        for (idx, &cell) in self.cells.iter().enumerate() {
            let (i, j) = (idx / 3, idx % 3);
            rotated[j * 3 + (2 - i)] = cell;
        }
        Board { cells: rotated }
    }

    /// Mirror left-right: the cell at (i, j) moves to (i, 2 - j)
    #[must_use = "flip_horizontal returns a new board; the original is unchanged"]
    pub fn flip_horizontal(&self) -> Self {
        let mut flipped = [Cell::Empty; 9];
        for (idx, &cell) in self.cells.iter().enumerate() {
            let (i, j) = (idx / 3, idx % 3);
            flipped[i * 3 + (2 - j)] = cell;
        }
        Board { cells: flipped }
    }

    /// Row-major key with one digit per cell.
    ///
    /// Two boards serialize identically iff they are cell-for-cell identical.
    pub fn serialize(&self) -> String {
        self.cells.iter().map(|&c| c.symbol()).collect()
    }

    /// Find the position where two boards differ (for inferring moves)
    ///
    /// Returns the first differing position in row-major order, or `None`
    /// if the boards are identical.
    pub fn find_changed_position(&self, other: &Board) -> Option<Position> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .position(|(a, b)| a != b)
            .map(Position::from_index)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
