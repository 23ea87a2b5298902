//! Board module - manages the game grid
//!
//! The board is a fixed `ROWS x COLS` grid of cell values (0 = empty, 1-7 =
//! piece color). Dimensions are const generics so the game board (`Arena`,
//! 15x10) and small test boards share one implementation with no allocation.
//! Coordinates: (x, y) where x is the column (left to right) and y the row
//! (top to bottom). Every read is bounds-checked; out of range is treated as a
//! collision by the piece queries.

use crate::pieces::Matrix;
use crate::scoring::clear_reward;
use crate::types::{Cell, BOARD_COLS, BOARD_ROWS, EMPTY};

/// Board-relative position of a piece's bounding-box top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Anchor {
    pub x: i8,
    pub y: i8,
}

impl Anchor {
    pub fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Result of merging a piece into the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// All piece cells were written
    Merged,
    /// A target cell was occupied or off the board; nothing was written
    Overlap,
}

/// Result of a row sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SweepResult {
    pub cleared: u32,
    pub score_delta: u32,
}

/// Fixed-size grid of cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board<const ROWS: usize, const COLS: usize> {
    cells: [[Cell; COLS]; ROWS],
}

/// The game-sized board
pub type Arena = Board<BOARD_ROWS, BOARD_COLS>;

impl<const ROWS: usize, const COLS: usize> Board<ROWS, COLS> {
    /// Create an empty board
    pub fn new() -> Self {
        Self {
            cells: [[EMPTY; COLS]; ROWS],
        }
    }

    pub fn width(&self) -> usize {
        COLS
    }

    pub fn height(&self) -> usize {
        ROWS
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<(usize, usize)> {
        if x < 0 || y < 0 || x as usize >= COLS || y as usize >= ROWS {
            return None;
        }
        Some((x as usize, y as usize))
    }

    /// Get cell at (x, y); `None` if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|(x, y)| self.cells[y][x])
    }

    /// Set cell at (x, y); returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some((x, y)) => {
                self.cells[y][x] = cell;
                true
            }
            None => false,
        }
    }

    /// In bounds and empty
    pub fn is_free(&self, x: i8, y: i8) -> bool {
        self.get(x, y) == Some(EMPTY)
    }

    /// True if any occupied piece cell lands out of bounds or on a filled cell
    pub fn collide(&self, piece: &Matrix, at: Anchor) -> bool {
        piece
            .occupied()
            .any(|(dx, dy, _)| !self.is_free(at.x + dx, at.y + dy))
    }

    /// Write the piece into the board.
    ///
    /// All-or-nothing: if any target cell is occupied or out of bounds the
    /// board is left untouched and `Overlap` is returned.
    pub fn merge(&mut self, piece: &Matrix, at: Anchor) -> MergeOutcome {
        if self.collide(piece, at) {
            return MergeOutcome::Overlap;
        }
        for (dx, dy, value) in piece.occupied() {
            self.set(at.x + dx, at.y + dy, value);
        }
        MergeOutcome::Merged
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        y < ROWS && self.cells[y].iter().all(|&c| c != EMPTY)
    }

    /// Remove every full row below the top row, bottom-up.
    ///
    /// A removed row is replaced by an empty row at the top and the same index
    /// is examined again, since the rows above have shifted down into it. The
    /// k-th clear within one sweep (k from 0) is worth `10 * 2^k`.
    pub fn sweep(&mut self) -> SweepResult {
        let mut result = SweepResult::default();
        let mut y = ROWS.saturating_sub(1);

        while y > 0 {
            if self.is_row_full(y) {
                self.remove_row(y);
                result.score_delta = result
                    .score_delta
                    .saturating_add(clear_reward(result.cleared));
                result.cleared += 1;
                continue;
            }
            y -= 1;
        }

        result
    }

    /// Drop row `y` and shift everything above it down by one
    fn remove_row(&mut self, y: usize) {
        self.cells.copy_within(0..y, 1);
        self.cells[0] = [EMPTY; COLS];
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells = [[EMPTY; COLS]; ROWS];
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().flatten().all(|&c| c == EMPTY)
    }

    /// Row slices, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.iter().map(|row| &row[..])
    }

    /// Rows top to bottom
    pub fn grid(&self) -> &[[Cell; COLS]; ROWS] {
        &self.cells
    }

    /// Append all cells in row-major order
    pub fn write_flat(&self, out: &mut Vec<Cell>) {
        out.reserve(ROWS * COLS);
        for row in &self.cells {
            out.extend_from_slice(row);
        }
    }

    /// Rebuild a board from row-major cells (`index = row * COLS + col`).
    ///
    /// Returns `None` when the length does not match the board size. Values
    /// above 7 are not valid colors and are stored as empty.
    pub fn from_flat(cells: &[Cell]) -> Option<Self> {
        if cells.len() != ROWS * COLS {
            return None;
        }
        let mut board = Self::new();
        for (row, chunk) in board.cells.iter_mut().zip(cells.chunks_exact(COLS)) {
            for (dst, &src) in row.iter_mut().zip(chunk) {
                *dst = if src <= 7 { src } else { EMPTY };
            }
        }
        Some(board)
    }
}

impl<const ROWS: usize, const COLS: usize> Default for Board<ROWS, COLS> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::piece;
    use crate::types::PieceKind;

    #[test]
    fn test_index_bounds() {
        assert_eq!(Arena::index(0, 0), Some((0, 0)));
        assert_eq!(Arena::index(9, 14), Some((9, 14)));
        assert_eq!(Arena::index(-1, 0), None);
        assert_eq!(Arena::index(10, 0), None);
        assert_eq!(Arena::index(0, 15), None);
    }

    #[test]
    fn test_merge_is_all_or_nothing() {
        let mut board = Arena::new();
        board.set(5, 3, 1);
        let before = board;

        // O piece cells sit at (1..=2, 1..=2) inside its box.
        let o = piece(PieceKind::O);
        assert_eq!(board.merge(&o, Anchor::new(4, 2)), MergeOutcome::Overlap);
        assert_eq!(board, before);

        assert_eq!(board.merge(&o, Anchor::new(0, 0)), MergeOutcome::Merged);
        assert_eq!(board.get(1, 1), Some(2));
        assert_eq!(board.get(2, 2), Some(2));
    }

    #[test]
    fn test_remove_row_shifts_down() {
        let mut board: Board<3, 2> = Board::new();
        board.set(0, 0, 1);
        board.set(1, 1, 2);
        board.remove_row(2);
        assert_eq!(board.grid(), &[[0, 0], [1, 0], [0, 2]]);
    }

    #[test]
    fn test_sweep_keeps_top_row() {
        let mut board: Board<2, 2> = Board::new();
        for x in 0..2 {
            board.set(x, 0, 1);
        }
        assert_eq!(board.sweep(), SweepResult::default());
        assert!(board.is_row_full(0));
    }
}
