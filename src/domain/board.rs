//! Board model: one paint record per cell
//!
//! The board is what the presentation layer draws. It carries no identity
//! beyond the position of each cell and is rebuilt from scratch, with every
//! cell unpainted, whenever the dimension is announced.

use thiserror::Error;

use crate::domain::color::{ColorChoice, PaintTag};
use crate::domain::core::CellCoords;

/// Errors that can occur during board operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("a board needs at least one cell per side")]
    InvalidDimension,
    #[error("cell {coords} is outside a {cells_per_side}x{cells_per_side} board")]
    OutOfBounds { coords: CellCoords, cells_per_side: u32 },
}

/// Current paint of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    paint: Option<ColorChoice>,
}

impl Cell {
    pub fn paint(&self) -> Option<ColorChoice> {
        self.paint
    }

    pub fn tag(&self) -> PaintTag {
        self.paint.map_or(PaintTag::Unpainted, |choice| choice.tag())
    }

    pub fn is_painted(&self) -> bool {
        self.paint.is_some()
    }
}

/// Square grid of cells stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells_per_side: u32,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an unpainted board
    ///
    /// # Arguments
    /// * `cells_per_side` - Side length in cells (must be > 0)
    pub fn new(cells_per_side: u32) -> Result<Self, BoardError> {
        if cells_per_side == 0 {
            return Err(BoardError::InvalidDimension);
        }
        let count = cells_per_side as usize * cells_per_side as usize;
        Ok(Self {
            cells_per_side,
            cells: vec![Cell::default(); count],
        })
    }

    /// Discards every cell and lays out a fresh board at `cells_per_side`
    pub fn rebuild(&mut self, cells_per_side: u32) -> Result<(), BoardError> {
        *self = Self::new(cells_per_side)?;
        Ok(())
    }

    pub fn cells_per_side(&self) -> u32 {
        self.cells_per_side
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn painted_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_painted()).count()
    }

    pub fn contains(&self, coords: CellCoords) -> bool {
        coords.index_on(self.cells_per_side).is_some()
    }

    pub fn cell(&self, coords: CellCoords) -> Result<&Cell, BoardError> {
        let index = self.index(coords)?;
        Ok(&self.cells[index])
    }

    /// Overwrites the paint of one cell
    pub fn paint(&mut self, coords: CellCoords, color: ColorChoice) -> Result<(), BoardError> {
        let index = self.index(coords)?;
        self.cells[index].paint = Some(color);
        Ok(())
    }

    /// Iterates rows top to bottom, each as a slice of cells left to right
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.cells_per_side as usize)
    }

    /// Iterates every cell with its coordinates in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (CellCoords, &Cell)> {
        let side = self.cells_per_side;
        self.cells.iter().enumerate().map(move |(i, cell)| {
            let i = i as u32;
            (CellCoords::new(i / side, i % side), cell)
        })
    }

    fn index(&self, coords: CellCoords) -> Result<usize, BoardError> {
        coords.index_on(self.cells_per_side).ok_or(BoardError::OutOfBounds {
            coords,
            cells_per_side: self.cells_per_side,
        })
    }
}
