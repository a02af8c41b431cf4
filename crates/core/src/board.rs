//! Board module - the 10x20 occupancy grid
//!
//! Cells are binary (1 = occupied, 0 = empty), stored in a flat row-major
//! array. Row 0 is the top. The board is a value: merging a piece or removing
//! rows returns a new board, and every `Board::new()` is its own allocation.

use arrayvec::ArrayVec;

use crate::pieces::Piece;
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Rows reported by [`Board::full_rows`], top to bottom
pub type FullRows = ArrayVec<usize, { BOARD_HEIGHT as usize }>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [u8; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [0; BOARD_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Cell value at (x, y), `None` when out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<u8> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(1))
    }

    /// Board with the given cell marked occupied; out-of-bounds cells are ignored
    #[must_use]
    pub fn with_cell(&self, cell: Cell) -> Self {
        let mut next = *self;
        if let Some(idx) = Self::index(cell.x, cell.y) {
            next.cells[idx] = 1;
        }
        next
    }

    /// Burn a piece into the grid.
    ///
    /// Cells above or below the grid are dropped; the piece has already been
    /// checked against the bounds by the collision rules.
    #[must_use]
    pub fn merge(&self, piece: &Piece) -> Self {
        piece
            .cells()
            .iter()
            .fold(*self, |board, &cell| board.with_cell(cell))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y).is_some_and(|row| row.iter().all(|&c| c == 1))
    }

    /// Indices of fully occupied rows, top to bottom
    pub fn full_rows(&self) -> FullRows {
        (0..BOARD_HEIGHT as usize)
            .filter(|&y| self.is_row_full(y))
            .collect()
    }

    /// Remove the given rows and prepend as many empty rows at the top.
    ///
    /// The remaining rows keep their relative order.
    #[must_use]
    pub fn remove_rows(&self, rows: &[usize]) -> Self {
        let width = BOARD_WIDTH as usize;
        let mut next = Self::new();
        let mut write_y = BOARD_HEIGHT as usize;

        // Scan from bottom to top, compacting kept rows downward
        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if rows.contains(&read_y) {
                continue;
            }
            write_y -= 1;
            let src = read_y * width;
            let dst = write_y * width;
            next.cells[dst..dst + width].copy_from_slice(&self.cells[src..src + width]);
        }

        next
    }

    /// Number of rows with at least one occupied cell
    pub fn occupied_row_count(&self) -> usize {
        self.rows().filter(|row| row.contains(&1)).count()
    }

    /// A single row, `None` when out of bounds
    pub fn row(&self, y: usize) -> Option<&[u8]> {
        if y >= BOARD_HEIGHT as usize {
            return None;
        }
        let start = y * BOARD_WIDTH as usize;
        Some(&self.cells[start..start + BOARD_WIDTH as usize])
    }

    /// Rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.cells.chunks_exact(BOARD_WIDTH as usize)
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Build a board from a 2D grid (for tests and fixtures)
    pub fn from_rows(rows: &[[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) -> Self {
        let mut board = Self::new();
        for (y, row) in rows.iter().enumerate() {
            for (x, &value) in row.iter().enumerate() {
                board.cells[y * BOARD_WIDTH as usize + x] = u8::from(value != 0);
            }
        }
        board
    }

    /// Convert to a 2D grid for rendering or assertions
    pub fn to_rows(&self) -> [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize] {
        let mut out = [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        for (dst, src) in out.iter_mut().zip(self.rows()) {
            dst.copy_from_slice(src);
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
