//! Piece module - the single-block falling piece
//!
//! A piece is just a (row, col) position plus a color index. Moves are
//! unchecked: the piece may transiently sit outside the grid after a move,
//! and only the engine decides legality by reverting illegal steps.

/// The active falling piece (one grid cell)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub row: i8,
    pub col: i8,
    /// Color index in 1..=7
    pub color: u8,
}

impl Piece {
    /// Create a piece at the top of the given column
    pub fn new(start_column: i8, color: u8) -> Self {
        Self {
            row: 0,
            col: start_column,
            color,
        }
    }

    /// Move down one row (unchecked)
    pub fn move_down(&mut self) {
        self.row += 1;
    }

    /// Move left one column (unchecked)
    pub fn move_left(&mut self) {
        self.col -= 1;
    }

    /// Move right one column (unchecked)
    pub fn move_right(&mut self) {
        self.col += 1;
    }

    /// Return to the top of the given column, keeping the color
    pub fn reset(&mut self, start_column: i8) {
        self.row = 0;
        self.col = start_column;
    }
}
