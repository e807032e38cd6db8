//! Board module - manages the grid of locked cells
//!
//! The board is a 20x10 grid stored as a flat row-major array, so it never
//! allocates. Coordinates are (row, col): row 0 is the top, col 0 the left.
//! Cells hold 0 when empty and a piece marker when locked.

use arrayvec::ArrayVec;

use crate::piece::Piece;
use crate::types::{Cell, COLS, EMPTY, ROWS};

/// Total number of cells on the board
const BOARD_SIZE: usize = ROWS * COLS;

/// The game board - 20 rows x 10 columns using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (row * COLS + col)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [EMPTY; BOARD_SIZE],
        }
    }

    /// Flat index of (row, col), or None outside the grid
    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if row < 0 || row as usize >= ROWS || col < 0 || col as usize >= COLS {
            return None;
        }
        Some(row as usize * COLS + col as usize)
    }

    /// Cell at (row, col), or None outside the grid
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col). Returns false if out of bounds.
    pub fn set(&mut self, row: i8, col: i8, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Occupancy as seen by collision checks.
    ///
    /// Outside the side walls or at/below the floor counts as occupied. Rows
    /// above the top (negative) count as free so pieces may overhang the
    /// visible area.
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        if col < 0 || col as usize >= COLS {
            return true;
        }
        if row as isize >= ROWS as isize {
            return true;
        }
        if row < 0 {
            return false;
        }
        self.cells[row as usize * COLS + col as usize] != EMPTY
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= ROWS {
            return false;
        }
        let start = row * COLS;
        self.cells[start..start + COLS].iter().all(|&c| c != EMPTY)
    }

    /// Write every filled cell of `piece` with its marker.
    ///
    /// No collision check happens here; callers merge only pieces that passed
    /// [`crate::collides`] at their current position. Cells outside the grid
    /// are dropped.
    pub fn merge(&mut self, piece: &Piece) {
        let marker = piece.kind.marker();
        for (row, col) in piece.cells() {
            self.set(row, col, marker);
        }
    }

    /// Remove `row`, shift every row above it down by one and empty the top.
    fn remove_row(&mut self, row: usize) {
        // copy_within handles the overlapping ranges
        for r in (1..=row).rev() {
            let src = (r - 1) * COLS;
            self.cells.copy_within(src..src + COLS, r * COLS);
        }
        self.cells[..COLS].fill(EMPTY);
    }

    /// Clear every full row, compacting the board downward.
    ///
    /// Scans from the bottom up. After a row is removed the row that slid into
    /// its index is tested again before moving on, so stacked full rows all
    /// clear in one call. Returns the cleared rows' original indices, bottom
    /// to top.
    pub fn clear_full_lines(&mut self) -> ArrayVec<usize, ROWS> {
        let mut cleared = ArrayVec::new();
        let mut row = ROWS;
        while row > 0 {
            let r = row - 1;
            if self.is_row_full(r) {
                // Every removal so far shifted the rows above down by one.
                cleared.push(r - cleared.len());
                self.remove_row(r);
            } else {
                row -= 1;
            }
        }
        cleared
    }

    /// Empty every cell
    pub fn reset_all(&mut self) {
        self.cells.fill(EMPTY);
    }

    /// Number of occupied cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != EMPTY).count()
    }

    /// Copy the board into a 2D grid for renderers
    pub fn write_u8_grid(&self, out: &mut [[u8; COLS]; ROWS]) {
        for (row, chunk) in out.iter_mut().zip(self.cells.chunks_exact(COLS)) {
            row.copy_from_slice(chunk);
        }
    }

    /// Build a board from 2D rows (missing rows/cols stay empty)
    pub fn from_rows(rows: &[[Cell; COLS]]) -> Self {
        let mut board = Self::new();
        for (r, row) in rows.iter().take(ROWS).enumerate() {
            board.cells[r * COLS..(r + 1) * COLS].copy_from_slice(row);
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
