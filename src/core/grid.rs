//! Grid module - the 4x4 tile matrix
//!
//! Uses a flat array for better cache locality and zero-allocation.
//! A cell value of 0 means empty; every non-zero value is a power of two.
//! That invariant is established by seeding (which writes 2 or 4) and
//! preserved by merging (which doubles an equal pair) and spawning.
//! Coordinates: (row, col) with row 0 at the top, col 0 at the left.

use arrayvec::ArrayVec;

use crate::types::GRID_SIZE;

/// Total number of cells on the grid
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// The game grid - a 4x4 matrix of tile values in flat row-major storage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    /// Flat array of cells, row-major order (row * GRID_SIZE + col)
    cells: [u32; CELL_COUNT],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [0; CELL_COUNT],
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: usize, col: usize) -> usize {
        debug_assert!(row < GRID_SIZE && col < GRID_SIZE);
        row * GRID_SIZE + col
    }

    /// Get cell value at (row, col)
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.cells[Self::index(row, col)]
    }

    /// Set cell value at (row, col)
    pub fn set(&mut self, row: usize, col: usize, value: u32) {
        self.cells[Self::index(row, col)] = value;
    }

    /// Total of all cell values - the final game score
    pub fn sum(&self) -> u32 {
        self.cells.iter().sum()
    }

    /// Largest tile value on the grid (0 when empty)
    pub fn max_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Coordinates of all empty cells in row-major order
    pub fn empty_cells(&self) -> ArrayVec<(u8, u8), CELL_COUNT> {
        let mut empties = ArrayVec::new();
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                if self.get(row, col) == 0 {
                    empties.push((row as u8, col as u8));
                }
            }
        }
        empties
    }

    /// Whether any legal move remains.
    ///
    /// True iff an empty cell exists or two equal tiles are adjacent in a
    /// row or column. This is the sole termination oracle: the game loop
    /// checks it before every turn and to detect game over.
    pub fn can_move(&self) -> bool {
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let value = self.get(row, col);
                if value == 0 {
                    return true;
                }
                if col + 1 < GRID_SIZE && value == self.get(row, col + 1) {
                    return true;
                }
                if row + 1 < GRID_SIZE && value == self.get(row + 1, col) {
                    return true;
                }
            }
        }
        false
    }

    /// Create from a 2D array (row-major)
    pub fn from_rows(rows: [[u32; GRID_SIZE]; GRID_SIZE]) -> Self {
        let mut grid = Self::new();
        for (row, values) in rows.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                grid.set(row, col, value);
            }
        }
        grid
    }

    /// Convert to a 2D array (row-major)
    pub fn rows(&self) -> [[u32; GRID_SIZE]; GRID_SIZE] {
        let mut rows = [[0; GRID_SIZE]; GRID_SIZE];
        for (row, values) in rows.iter_mut().enumerate() {
            for (col, value) in values.iter_mut().enumerate() {
                *value = self.get(row, col);
            }
        }
        rows
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
