//! Property tests for the board and rotation rules.
//!
//! Covered:
//! - `collide` agrees with a cell-by-cell reference check.
//! - Four rotations in one direction restore any square matrix.
//! - Sweeping k full bottom rows removes exactly those rows and pays 10*(2^k - 1).
//! - Hard drop lands where repeated soft drops would.

use proptest::prelude::*;

use duel_tetris::core::{piece, rotate, Anchor, Arena, GameState, Matrix};
use duel_tetris::types::{Direction, Phase, PieceKind, BOARD_COLS, BOARD_ROWS, EMPTY};

fn arena_from(cells: &[u8]) -> Arena {
    Arena::from_flat(cells).expect("generated arena has the right size")
}

fn kind_strategy() -> impl Strategy<Value = PieceKind> {
    (0usize..7).prop_map(|i| PieceKind::ALL[i])
}

proptest! {
    #[test]
    fn collide_matches_reference(
        cells in prop::collection::vec(prop_oneof![3 => Just(0u8), 1 => 1u8..=7], BOARD_ROWS * BOARD_COLS),
        kind in kind_strategy(),
        turns in 0usize..4,
        x in -4i8..12,
        y in -4i8..17,
    ) {
        let board = arena_from(&cells);
        let mut m = piece(kind);
        for _ in 0..turns {
            rotate(&mut m, Direction::Clockwise).unwrap();
        }

        let expected = m.occupied().any(|(dx, dy, _)| {
            let (bx, by) = (x + dx, y + dy);
            if bx < 0 || by < 0 || bx as usize >= BOARD_COLS || by as usize >= BOARD_ROWS {
                return true;
            }
            cells[by as usize * BOARD_COLS + bx as usize] != EMPTY
        });
        prop_assert_eq!(board.collide(&m, Anchor::new(x, y)), expected);
    }

    #[test]
    fn four_rotations_are_identity(
        n in 1usize..=4,
        values in prop::collection::vec(0u8..=7, 16),
        clockwise in any::<bool>(),
    ) {
        let rows: Vec<&[u8]> = values.chunks(4).take(n).map(|r| &r[..n]).collect();
        let original = Matrix::from_rows(&rows).unwrap();
        let direction = if clockwise { Direction::Clockwise } else { Direction::CounterClockwise };

        let mut m = original;
        for _ in 0..4 {
            rotate(&mut m, direction).unwrap();
        }
        prop_assert_eq!(m, original);
    }

    #[test]
    fn sweep_removes_exactly_the_full_rows(
        k in 0usize..BOARD_ROWS,
        above in prop::collection::vec(0u8..=7, BOARD_ROWS * BOARD_COLS),
        holes in prop::collection::vec(0usize..BOARD_COLS, BOARD_ROWS),
    ) {
        // Bottom k rows full; every other row has at least one hole.
        let mut cells = above;
        for (row, &hole) in holes.iter().enumerate() {
            let base = row * BOARD_COLS;
            if row >= BOARD_ROWS - k {
                for c in &mut cells[base..base + BOARD_COLS] {
                    if *c == EMPTY {
                        *c = 1;
                    }
                }
            } else {
                cells[base + hole] = EMPTY;
            }
        }
        let mut board = arena_from(&cells);
        let before = board;

        let result = board.sweep();
        prop_assert_eq!(result.cleared as usize, k);
        prop_assert_eq!(result.score_delta, 10 * ((1u32 << k) - 1));

        for y in 0..BOARD_ROWS {
            let row = &board.grid()[y];
            if y < k {
                prop_assert!(row.iter().all(|&c| c == EMPTY));
            } else {
                prop_assert_eq!(row, &before.grid()[y - k]);
            }
        }
    }

    #[test]
    fn hard_drop_equals_repeated_soft_drop(seed in any::<u32>(), warmup in 0usize..8) {
        let mut a = GameState::new(seed);
        a.start();
        for _ in 0..warmup {
            a.hard_drop();
        }
        prop_assume!(a.phase() == Phase::Running);

        let mut b = a.clone();
        let distance = a.drop_distance().unwrap();
        a.hard_drop();
        for _ in 0..=distance {
            b.soft_drop();
        }

        prop_assert_eq!(a.board(), b.board());
        prop_assert_eq!(a.active(), b.active());
        prop_assert_eq!(a.phase(), b.phase());
        prop_assert_eq!(a.score(), b.score());
    }
}
