//! Rotation module - matrix rotation and wall-kick resolution
//!
//! Rotation is an in-place transpose followed by either reversing every row
//! (clockwise) or reversing the row order (counter-clockwise). Only square
//! matrices can be rotated; anything else is rejected untouched.
//!
//! Wall kicks probe horizontal positions with an oscillating increment
//! (+1, -2, +3, -4, ...) applied cumulatively to the anchor, so a 4-wide
//! piece tries x, x+1, x-1, x+2 before giving up.

use thiserror::Error;

use crate::board::{Anchor, Board};
use crate::pieces::Matrix;
use crate::types::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransformError {
    #[error("cannot rotate a non-square {width}x{height} matrix")]
    NotSquare { width: u8, height: u8 },
}

/// Outcome of a rotate command against the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationOutcome {
    /// Rotation kept; the piece now sits at column `x` on the same row
    Rotated { x: i8 },
    /// Every probe collided; matrix and anchor are unchanged
    Rejected,
}

/// Rotate a square matrix 90° in place
pub fn rotate(matrix: &mut Matrix, direction: Direction) -> Result<(), TransformError> {
    if !matrix.is_square() {
        return Err(TransformError::NotSquare {
            width: matrix.width(),
            height: matrix.height(),
        });
    }

    matrix.transpose();
    match direction {
        Direction::Clockwise => matrix.reverse_each_row(),
        Direction::CounterClockwise => matrix.reverse_row_order(),
    }
    Ok(())
}

/// Rotate `matrix` and find a non-colliding column for it.
///
/// On `Rejected` the matrix has been rotated back, so the caller's piece is
/// exactly as it was.
pub fn resolve_rotation<const ROWS: usize, const COLS: usize>(
    board: &Board<ROWS, COLS>,
    matrix: &mut Matrix,
    anchor: Anchor,
    direction: Direction,
) -> RotationOutcome {
    if let Err(err) = rotate(matrix, direction) {
        log::warn!("rotation ignored: {err}");
        return RotationOutcome::Rejected;
    }

    let width = matrix.width() as i8;
    let mut x = anchor.x;
    let mut step: i8 = 1;

    while board.collide(matrix, Anchor::new(x, anchor.y)) {
        x += step;
        step = -(step + step.signum());
        if step.abs() > width {
            // Square matrices always rotate back cleanly.
            let _ = rotate(matrix, direction.reverse());
            return RotationOutcome::Rejected;
        }
    }

    RotationOutcome::Rotated { x }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Arena;
    use crate::pieces::piece;
    use crate::types::{Cell, PieceKind};

    fn rows(m: &Matrix) -> Vec<Vec<Cell>> {
        m.rows().map(|r| r.to_vec()).collect()
    }

    #[test]
    fn clockwise_rotates_t_piece() {
        let mut m = piece(PieceKind::T);
        rotate(&mut m, Direction::Clockwise).unwrap();
        assert_eq!(
            rows(&m),
            vec![
                vec![0, 0, 1, 0],
                vec![0, 1, 1, 0],
                vec![0, 0, 1, 0],
                vec![0, 0, 0, 0],
            ]
        );
    }

    #[test]
    fn counter_clockwise_undoes_clockwise() {
        let original = piece(PieceKind::L);
        let mut m = original;
        rotate(&mut m, Direction::Clockwise).unwrap();
        rotate(&mut m, Direction::CounterClockwise).unwrap();
        assert_eq!(m, original);
    }

    #[test]
    fn non_square_is_left_untouched() {
        let original = Matrix::from_rows(&[&[1, 1, 1], &[0, 1, 0]]).unwrap();
        let mut m = original;
        assert_eq!(
            rotate(&mut m, Direction::Clockwise),
            Err(TransformError::NotSquare {
                width: 3,
                height: 2
            })
        );
        assert_eq!(m, original);

        let board = Arena::new();
        assert_eq!(
            resolve_rotation(&board, &mut m, Anchor::new(3, 0), Direction::Clockwise),
            RotationOutcome::Rejected
        );
        assert_eq!(m, original);
    }

    #[test]
    fn kicks_off_the_left_wall() {
        // Vertical I in column 1 of its box; at x=-1 it hugs the left wall.
        let board = Arena::new();
        let mut m = piece(PieceKind::I);
        let outcome = resolve_rotation(&board, &mut m, Anchor::new(-1, 5), Direction::Clockwise);
        // Horizontal I fills row 1 of its box, so x must be >= 0.
        assert_eq!(outcome, RotationOutcome::Rotated { x: 0 });
    }

    #[test]
    fn rejected_rotation_restores_matrix() {
        // One-column well: the vertical I fits, the horizontal one never does.
        let mut board = Arena::new();
        for y in 0..15 {
            for x in 0..10 {
                if x != 4 {
                    board.set(x, y, 1);
                }
            }
        }
        let original = piece(PieceKind::I);
        let mut m = original;
        let outcome = resolve_rotation(&board, &mut m, Anchor::new(3, 5), Direction::Clockwise);
        assert_eq!(outcome, RotationOutcome::Rejected);
        assert_eq!(m, original);
    }
}
