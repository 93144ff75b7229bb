//! Grid module - manages the game grid
//!
//! The grid is a 20x10 cell store where each cell is either empty (0) or
//! holds a color index (1..=7). Uses a flat array for better cache locality
//! and zero-allocation.
//! Coordinates: (row, col) where row ranges 0..19 (top to bottom), col ranges
//! 0..9 (left to right). Spawn position for new pieces is (0, 5).

use arrayvec::ArrayVec;

use crate::types::{Cell, GRID_HEIGHT, GRID_WIDTH};

/// Total number of cells on the grid
const GRID_SIZE: usize = GRID_WIDTH * GRID_HEIGHT;

/// The game grid - 20 rows x 10 columns using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Flat array of cells, row-major order (row * WIDTH + col)
    cells: [Cell; GRID_SIZE],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [0; GRID_SIZE],
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if row < 0 || row >= GRID_HEIGHT as i8 || col < 0 || col >= GRID_WIDTH as i8 {
            return None;
        }
        Some((row as usize) * GRID_WIDTH + (col as usize))
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        GRID_HEIGHT
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        GRID_WIDTH
    }

    /// Check if (row, col) lies inside the grid
    pub fn is_in_bounds(&self, row: i8, col: i8) -> bool {
        Self::index(row, col).is_some()
    }

    /// Get cell value at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell value at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: i8, col: i8, value: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = value;
                true
            }
            None => false,
        }
    }

    /// Check if position is empty (within bounds and cell value 0).
    /// Out-of-bounds positions count as occupied so they block movement.
    pub fn is_empty(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(0))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= GRID_HEIGHT {
            return false;
        }
        let start = row * GRID_WIDTH;
        let end = start + GRID_WIDTH;
        self.cells[start..end].iter().all(|&cell| cell != 0)
    }

    /// Clear a row by zeroing every cell in it
    pub fn clear_row(&mut self, row: usize) {
        if row >= GRID_HEIGHT {
            return;
        }
        let start = row * GRID_WIDTH;
        let end = start + GRID_WIDTH;
        for cell in &mut self.cells[start..end] {
            *cell = 0;
        }
    }

    /// Copy a row's contents down by `offset` rows, then zero the source row.
    /// Caller guarantees `row + offset` stays in bounds.
    pub fn move_row_down(&mut self, row: usize, offset: usize) {
        if offset == 0 || row + offset >= GRID_HEIGHT {
            return;
        }
        let src_start = row * GRID_WIDTH;
        let dst_start = (row + offset) * GRID_WIDTH;
        self.cells
            .copy_within(src_start..src_start + GRID_WIDTH, dst_start);
        self.clear_row(row);
    }

    /// Clear all full rows and apply gravity compaction in a single
    /// bottom-to-top pass. Each full row is cleared and counted; each
    /// non-full row seen after at least one clear shifts down by the
    /// running count, so rows above a gap between two cleared rows move
    /// by the cumulative count and every row is moved at most once.
    /// Returns the cleared row indices in bottom-to-top order.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, GRID_HEIGHT> {
        let mut cleared_rows = ArrayVec::new();

        for row in (0..GRID_HEIGHT).rev() {
            if self.is_row_full(row) {
                self.clear_row(row);
                cleared_rows.push(row);
            } else if !cleared_rows.is_empty() {
                self.move_row_down(row, cleared_rows.len());
            }
        }

        cleared_rows
    }

    /// Zero the entire grid
    pub fn reset(&mut self) {
        self.cells = [0; GRID_SIZE];
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy the grid into a 2D u8 array (for snapshot export)
    pub fn write_u8_grid(&self, out: &mut [[u8; GRID_WIDTH]; GRID_HEIGHT]) {
        for (row, out_row) in out.iter_mut().enumerate() {
            let start = row * GRID_WIDTH;
            out_row.copy_from_slice(&self.cells[start..start + GRID_WIDTH]);
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_index_calculation() {
        assert_eq!(Grid::index(0, 0), Some(0));
        assert_eq!(Grid::index(0, 9), Some(9));
        assert_eq!(Grid::index(1, 0), Some(10));
        assert_eq!(Grid::index(19, 9), Some(199));
        assert_eq!(Grid::index(-1, 0), None);
        assert_eq!(Grid::index(0, 10), None);
        assert_eq!(Grid::index(20, 0), None);
    }

    #[test]
    fn test_grid_flat_array() {
        let mut grid = Grid::new();

        grid.set(0, 0, 3);
        grid.set(10, 5, 7);

        assert_eq!(grid.get(0, 0), Some(3));
        assert_eq!(grid.get(10, 5), Some(7));

        // Verify internal layout
        assert_eq!(grid.cells[0], 3);
        assert_eq!(grid.cells[10 * 10 + 5], 7);
    }

    #[test]
    fn test_move_row_down_zeroes_source() {
        let mut grid = Grid::new();
        grid.set(5, 2, 4);

        grid.move_row_down(5, 3);

        assert_eq!(grid.get(8, 2), Some(4));
        assert_eq!(grid.get(5, 2), Some(0));
    }
}
