//! Core domain types shared across layers

use std::fmt;

/// Position of a cell on the board, zero-based from the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellCoords {
    pub row: u32,
    pub col: u32,
}

impl CellCoords {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Row-major index on a board with `cells_per_side` cells per side
    ///
    /// Returns None if the coordinates fall outside that board.
    pub fn index_on(&self, cells_per_side: u32) -> Option<usize> {
        if self.row >= cells_per_side || self.col >= cells_per_side {
            return None;
        }
        Some(self.row as usize * cells_per_side as usize + self.col as usize)
    }
}

impl fmt::Display for CellCoords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
