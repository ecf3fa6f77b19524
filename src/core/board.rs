//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is empty or filled with a shape kind.
//! Uses a flat array for cache locality and zero-allocation.
//! Coordinates: x ranges 0..9 left to right, y ranges 0..19. Gravity is inverted:
//! row 0 is the resting edge where pieces accumulate, row 19 the arrival edge
//! where they spawn. Pieces travel in decreasing y.

use arrayvec::ArrayVec;

use crate::types::{Cell, ShapeKind, GRID_HEIGHT, GRID_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (GRID_WIDTH as usize) * (GRID_HEIGHT as usize);

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= GRID_WIDTH || y < 0 || y >= GRID_HEIGHT {
            return None;
        }
        Some((y as usize) * (GRID_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> i8 {
        GRID_WIDTH
    }

    pub fn height(&self) -> i8 {
        GRID_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is open (within bounds and empty)
    pub fn is_open(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: i8) -> bool {
        let Some(start) = Self::index(0, y) else {
            return false;
        };
        let end = start + GRID_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Clear all full rows and return the indices that were cleared, ascending.
    ///
    /// Rows shift toward the resting edge (row 0): every row above a cleared
    /// row moves down by one index, and the vacated rows at the arrival edge
    /// are refilled with empty cells. Row count stays at `GRID_HEIGHT`.
    pub fn clear_full_rows(&mut self) -> ArrayVec<i8, 4> {
        let mut cleared = ArrayVec::new();
        let width = GRID_WIDTH as usize;
        let mut write_y = 0usize;

        // Compact surviving rows toward row 0, preserving their order.
        for read_y in 0..GRID_HEIGHT as usize {
            if self.is_row_full(read_y as i8) {
                cleared.push(read_y as i8);
            } else {
                if write_y != read_y {
                    let src = read_y * width;
                    self.cells.copy_within(src..src + width, write_y * width);
                }
                write_y += 1;
            }
        }

        // Empty the vacated rows at the arrival edge.
        for cell in &mut self.cells[write_y * width..] {
            *cell = None;
        }

        cleared
    }

    /// Write a piece's blocks into the grid using its shape as the cell value.
    ///
    /// Blocks with y < 0 are skipped; in-bounds overlap is the caller's
    /// responsibility (collision is checked before a piece is merged).
    pub fn fill_blocks(&mut self, blocks: impl IntoIterator<Item = (i8, i8)>, kind: ShapeKind) {
        for (x, y) in blocks {
            if y >= 0 {
                self.set(x, y, Some(kind));
            }
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy the grid into a 2D array, indexed [y][x].
    pub fn write_rows(&self, out: &mut [[Cell; GRID_WIDTH as usize]; GRID_HEIGHT as usize]) {
        let width = GRID_WIDTH as usize;
        for (y, row) in out.iter_mut().enumerate() {
            let start = y * width;
            row.copy_from_slice(&self.cells[start..start + width]);
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
