//! Pieces module - piece matrices and the piece factory
//!
//! Every canonical piece is a 4x4 matrix of cell values with zero padding.
//! `Matrix` keeps its logical width/height so non-square shapes can be
//! represented (and rejected by rotation) without heap allocation.

use crate::types::{Cell, PieceKind, EMPTY, PIECE_SIZE};

/// Largest supported matrix side
pub const MAX_DIM: usize = PIECE_SIZE;

/// Fixed-capacity cell matrix, row-major (`cells[y][x]`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Matrix {
    width: u8,
    height: u8,
    cells: [[Cell; MAX_DIM]; MAX_DIM],
}

impl Matrix {
    /// An all-empty 4x4 matrix
    pub const fn empty() -> Self {
        Self {
            width: MAX_DIM as u8,
            height: MAX_DIM as u8,
            cells: [[EMPTY; MAX_DIM]; MAX_DIM],
        }
    }

    /// Build a matrix from rows.
    ///
    /// Returns `None` for ragged rows, zero rows, or anything larger than
    /// `MAX_DIM` in either direction.
    pub fn from_rows(rows: &[&[Cell]]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.len();
        if height > MAX_DIM || width == 0 || width > MAX_DIM {
            return None;
        }
        if rows.iter().any(|r| r.len() != width) {
            return None;
        }

        let mut cells = [[EMPTY; MAX_DIM]; MAX_DIM];
        for (y, row) in rows.iter().enumerate() {
            cells[y][..width].copy_from_slice(row);
        }
        Some(Self {
            width: width as u8,
            height: height as u8,
            cells,
        })
    }

    const fn square(cells: [[Cell; MAX_DIM]; MAX_DIM]) -> Self {
        Self {
            width: MAX_DIM as u8,
            height: MAX_DIM as u8,
            cells,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    /// Cell at column `x`, row `y`; `None` outside the logical size
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        if x >= self.width as usize || y >= self.height as usize {
            return None;
        }
        Some(self.cells[y][x])
    }

    /// Iterate the logical rows
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        let w = self.width as usize;
        self.cells[..self.height as usize].iter().map(move |r| &r[..w])
    }

    /// Iterate `(dx, dy, value)` for every non-zero cell
    pub fn occupied(&self) -> impl Iterator<Item = (i8, i8, Cell)> + '_ {
        self.rows().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &v)| v != EMPTY)
                .map(move |(x, &v)| (x as i8, y as i8, v))
        })
    }

    /// Swap `m[x][y]` and `m[y][x]` for every x < y. Square matrices only.
    pub(crate) fn transpose(&mut self) {
        let n = self.width as usize;
        for y in 0..n {
            for x in 0..y {
                let tmp = self.cells[x][y];
                self.cells[x][y] = self.cells[y][x];
                self.cells[y][x] = tmp;
            }
        }
    }

    pub(crate) fn reverse_each_row(&mut self) {
        let w = self.width as usize;
        for row in self.cells[..self.height as usize].iter_mut() {
            row[..w].reverse();
        }
    }

    pub(crate) fn reverse_row_order(&mut self) {
        self.cells[..self.height as usize].reverse();
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::empty()
    }
}

const T_SHAPE: [[Cell; 4]; 4] = [[0, 0, 0, 0], [1, 1, 1, 0], [0, 1, 0, 0], [0, 0, 0, 0]];
const O_SHAPE: [[Cell; 4]; 4] = [[0, 0, 0, 0], [0, 2, 2, 0], [0, 2, 2, 0], [0, 0, 0, 0]];
const L_SHAPE: [[Cell; 4]; 4] = [[0, 3, 0, 0], [0, 3, 0, 0], [0, 3, 3, 0], [0, 0, 0, 0]];
const J_SHAPE: [[Cell; 4]; 4] = [[0, 0, 4, 0], [0, 0, 4, 0], [0, 4, 4, 0], [0, 0, 0, 0]];
const I_SHAPE: [[Cell; 4]; 4] = [[0, 5, 0, 0], [0, 5, 0, 0], [0, 5, 0, 0], [0, 5, 0, 0]];
const S_SHAPE: [[Cell; 4]; 4] = [[0, 0, 0, 0], [0, 6, 6, 0], [6, 6, 0, 0], [0, 0, 0, 0]];
const Z_SHAPE: [[Cell; 4]; 4] = [[0, 0, 0, 0], [7, 7, 0, 0], [0, 7, 7, 0], [0, 0, 0, 0]];

/// Spawn-orientation matrix for a piece kind
pub fn piece(kind: PieceKind) -> Matrix {
    match kind {
        PieceKind::T => Matrix::square(T_SHAPE),
        PieceKind::O => Matrix::square(O_SHAPE),
        PieceKind::L => Matrix::square(L_SHAPE),
        PieceKind::J => Matrix::square(J_SHAPE),
        PieceKind::I => Matrix::square(I_SHAPE),
        PieceKind::S => Matrix::square(S_SHAPE),
        PieceKind::Z => Matrix::square(Z_SHAPE),
    }
}

/// Piece factory: type id 1..=7 to its matrix, `None` for anything else
pub fn create_piece(id: u8) -> Option<Matrix> {
    PieceKind::from_id(id).map(piece)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_piece_has_four_cells_of_its_own_color() {
        for kind in PieceKind::ALL {
            let m = piece(kind);
            let cells: Vec<_> = m.occupied().collect();
            assert_eq!(cells.len(), 4, "{kind:?}");
            assert!(cells.iter().all(|&(_, _, v)| v == kind.id()));
        }
    }

    #[test]
    fn from_rows_rejects_ragged_and_oversized() {
        assert!(Matrix::from_rows(&[&[1, 1], &[1]]).is_none());
        assert!(Matrix::from_rows(&[&[1, 1, 1, 1, 1]]).is_none());
        assert!(Matrix::from_rows(&[]).is_none());

        let m = Matrix::from_rows(&[&[1, 1, 1], &[0, 1, 0]]).unwrap();
        assert_eq!((m.width(), m.height()), (3, 2));
        assert!(!m.is_square());
        assert_eq!(m.get(1, 1), Some(1));
        assert_eq!(m.get(3, 0), None);
    }

    #[test]
    fn transpose_swaps_across_diagonal() {
        let mut m = Matrix::from_rows(&[&[1, 2], &[3, 4]]).unwrap();
        m.transpose();
        let rows: Vec<Vec<Cell>> = m.rows().map(|r| r.to_vec()).collect();
        assert_eq!(rows, vec![vec![1, 3], vec![2, 4]]);
    }
}
