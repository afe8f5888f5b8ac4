//! The spatial grid — exclusive owner of every cell.
//!
//! Cells do not point back at the grid; neighbour resolution is a
//! grid-owned lookup over coordinates. Out-of-bounds coordinates are a
//! normal condition and answer with `None`, never an error.

use crate::cell::Cell;
use crate::error::{WorldError, WorldResult};
use crate::types::CellCoord;

/// Fixed slot order of a neighbour lookup: west, north, east, south.
pub const NEIGHBOUR_SLOTS: usize = 4;

#[derive(Debug, Clone)]
pub struct Grid {
    width:  i32,
    height: i32,
    cells:  Vec<Cell>,
}

impl Grid {
    /// Build a grid with one cell per coordinate, row-major.
    pub fn new(width: i32, height: i32) -> WorldResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(WorldError::InvalidDimensions { width, height });
        }
        let mut cells = Vec::with_capacity((width as usize) * (height as usize));
        for y in 0..height {
            for x in 0..width {
                cells.push(Cell::new(CellCoord::new(x, y)));
            }
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub const fn width(&self) -> i32 {
        self.width
    }

    pub const fn height(&self) -> i32 {
        self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    /// Coordinate-indexed lookup. `None` for anything outside bounds.
    pub fn cell_at(&self, x: i32, y: i32) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    pub fn cell_at_mut(&mut self, x: i32, y: i32) -> Option<&mut Cell> {
        self.index(x, y).map(move |i| &mut self.cells[i])
    }

    pub fn cell(&self, coord: CellCoord) -> Option<&Cell> {
        self.cell_at(coord.x, coord.y)
    }

    pub fn cell_mut(&mut self, coord: CellCoord) -> Option<&mut Cell> {
        self.cell_at_mut(coord.x, coord.y)
    }

    pub fn contains(&self, coord: CellCoord) -> bool {
        self.index(coord.x, coord.y).is_some()
    }

    /// Direct neighbours of a coordinate, exactly four slots in order
    /// {west, north, east, south}. A slot is `None` when that neighbour
    /// falls outside the grid — callers must check before use.
    pub fn neighbours(&self, at: CellCoord) -> [Option<&Cell>; NEIGHBOUR_SLOTS] {
        [
            self.cell_at(at.x - 1, at.y),
            self.cell_at(at.x, at.y - 1),
            self.cell_at(at.x + 1, at.y),
            self.cell_at(at.x, at.y + 1),
        ]
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut()
    }
}
