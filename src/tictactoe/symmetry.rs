//! D4 symmetry group operations for board canonicalization

use serde::{Deserialize, Serialize};

use super::board::{Board, Cell, Position};

/// D4 symmetry transformation (dihedral group of the square)
///
/// A transform reflects first (left-right mirror) and then rotates
/// clockwise, matching [`Board::flip_horizontal`] and [`Board::rotate90`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct D4Transform {
    /// Rotation in degrees (0, 90, 180, 270)
    pub rotation: u16,
    /// Whether to apply reflection
    pub reflection: bool,
}

impl D4Transform {
    /// Create identity transform
    pub fn identity() -> Self {
        D4Transform {
            rotation: 0,
            reflection: false,
        }
    }

    /// All 8 D4 transforms in orbit generation order: the four rotations of
    /// the original, then the four rotations of its horizontal flip.
    pub fn all() -> [D4Transform; 8] {
        let mut transforms = [D4Transform::identity(); 8];
        for (i, reflection) in [false, true].into_iter().enumerate() {
            for (j, rotation) in [0, 90, 180, 270].into_iter().enumerate() {
                transforms[i * 4 + j] = D4Transform {
                    rotation,
                    reflection,
                };
            }
        }
        transforms
    }

    /// Apply transform to a position
    pub fn transform_position(&self, pos: Position) -> Position {
        let (mut row, mut col) = (pos.row, pos.col);

        if self.reflection {
            col = 2 - col;
        }

        for _ in 0..(self.rotation / 90) {
            let new_row = col;
            let new_col = 2 - row;
            row = new_row;
            col = new_col;
        }

        Position::new(row, col)
    }

    /// Apply transform to every cell of a board
    pub fn apply(&self, board: &Board) -> Board {
        let mut transformed = [Cell::Empty; 9];
        for (idx, &cell) in board.cells().iter().enumerate() {
            let target = self.transform_position(Position::from_index(idx));
            transformed[target.row * 3 + target.col] = cell;
        }
        Board::from_cells(transformed)
    }

    /// Get the inverse transform
    pub fn inverse(&self) -> D4Transform {
        if self.reflection {
            // reflect-then-rotate is a reflection across some axis of the
            // square, hence its own inverse
            *self
        } else {
            D4Transform {
                rotation: (360 - self.rotation) % 360,
                reflection: false,
            }
        }
    }
}

/// Canonical representative of a board's symmetry orbit.
///
/// `key` is the sole identity used for transposition-table lookup and
/// strategy-table storage. Move legality and display always work on the
/// literal board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalForm {
    /// The orbit member with the smallest serialization
    pub board: Board,
    /// The transform that maps the original board onto `board`
    pub transform: D4Transform,
    /// Serialization of `board`
    pub key: String,
}

impl CanonicalForm {
    /// Map a position from original coordinates to canonical coordinates
    pub fn map_to_canonical(&self, original: Position) -> Position {
        self.transform.transform_position(original)
    }

    /// Map a position from canonical coordinates back to original coordinates
    pub fn map_to_original(&self, canonical: Position) -> Position {
        self.transform.inverse().transform_position(canonical)
    }
}

impl Board {
    /// The 8 boards of this board's dihedral orbit, in the order given by
    /// [`D4Transform::all`]. Symmetric boards repeat entries.
    pub fn symmetries(&self) -> [Board; 8] {
        D4Transform::all().map(|t| t.apply(self))
    }

    /// Lexicographically minimal orbit member and its key.
    ///
    /// Ties go to the first transform in generation order, so the identity
    /// wins whenever the board is already canonical.
    pub fn canonical_form(&self) -> CanonicalForm {
        let mut best_board = *self;
        let mut best_transform = D4Transform::identity();
        let mut best_key = self.serialize();

        for transform in D4Transform::all().into_iter().skip(1) {
            let candidate = transform.apply(self);
            let key = candidate.serialize();
            if key < best_key {
                best_key = key;
                best_board = candidate;
                best_transform = transform;
            }
        }

        CanonicalForm {
            board: best_board,
            transform: best_transform,
            key: best_key,
        }
    }

    /// Shorthand for `canonical_form().key`
    pub fn canonical_key(&self) -> String {
        self.canonical_form().key
    }
}
