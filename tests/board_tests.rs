//! Board tests - collision, merge and sweep on the game arena

use duel_tetris::core::{piece, Anchor, Arena, Board, MergeOutcome, SweepResult};
use duel_tetris::types::{PieceKind, BOARD_COLS, BOARD_ROWS, EMPTY};

fn fill_row(board: &mut Arena, y: i8, value: u8) {
    for x in 0..BOARD_COLS as i8 {
        board.set(x, y, value);
    }
}

#[test]
fn test_arena_new_empty() {
    let board = Arena::new();
    assert_eq!(board.width(), BOARD_COLS);
    assert_eq!(board.height(), BOARD_ROWS);

    for y in 0..BOARD_ROWS as i8 {
        for x in 0..BOARD_COLS as i8 {
            assert_eq!(board.get(x, y), Some(EMPTY), "cell ({x}, {y})");
        }
    }
    assert!(board.is_empty());
}

#[test]
fn test_get_out_of_bounds() {
    let board = Arena::new();
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_COLS as i8, 0), None);
    assert_eq!(board.get(0, BOARD_ROWS as i8), None);
}

#[test]
fn test_collide_against_walls_and_floor() {
    let board = Arena::new();
    let o = piece(PieceKind::O);

    // O fills box columns 1..=2 and rows 1..=2.
    assert!(!board.collide(&o, Anchor::new(-1, 0)));
    assert!(board.collide(&o, Anchor::new(-2, 0)));
    assert!(!board.collide(&o, Anchor::new(7, 0)));
    assert!(board.collide(&o, Anchor::new(8, 0)));
    assert!(!board.collide(&o, Anchor::new(3, 12)));
    assert!(board.collide(&o, Anchor::new(3, 13)));
    // Above the top counts as a collision too.
    assert!(board.collide(&o, Anchor::new(3, -2)));
}

#[test]
fn test_collide_with_filled_cell() {
    let mut board = Arena::new();
    let t = piece(PieceKind::T);
    board.set(5, 6, 3);

    // T: row 1 = cols 0..=2, row 2 = col 1.
    assert!(board.collide(&t, Anchor::new(4, 4)));
    assert!(!board.collide(&t, Anchor::new(4, 3)));
    assert!(board.collide(&t, Anchor::new(3, 5)));
}

#[test]
fn test_merge_writes_piece_cells() {
    let mut board = Arena::new();
    let s = piece(PieceKind::S);

    // S: row 1 = cols 1..=2, row 2 = cols 0..=1.
    assert_eq!(board.merge(&s, Anchor::new(0, 12)), MergeOutcome::Merged);
    assert_eq!(board.get(1, 13), Some(6));
    assert_eq!(board.get(2, 13), Some(6));
    assert_eq!(board.get(0, 14), Some(6));
    assert_eq!(board.get(2, 14), Some(EMPTY));

    // One row lower the bottom row would leave the board.
    assert_eq!(board.merge(&s, Anchor::new(4, 13)), MergeOutcome::Overlap);
}

#[test]
fn test_merge_overlap_leaves_board_untouched() {
    let mut board = Arena::new();
    board.set(4, 2, 1);
    let before = board;

    let i = piece(PieceKind::I);
    assert_eq!(board.merge(&i, Anchor::new(3, 0)), MergeOutcome::Overlap);
    assert_eq!(board, before);
}

#[test]
fn test_sweep_single_row_scores_ten() {
    let mut board = Arena::new();
    fill_row(&mut board, 14, 2);
    board.set(0, 13, 4);

    let result = board.sweep();
    assert_eq!(
        result,
        SweepResult {
            cleared: 1,
            score_delta: 10
        }
    );
    // Row above moved down.
    assert_eq!(board.get(0, 14), Some(4));
    assert_eq!(board.get(0, 13), Some(EMPTY));
}

#[test]
fn test_sweep_non_adjacent_rows() {
    let mut board = Arena::new();
    fill_row(&mut board, 14, 1);
    fill_row(&mut board, 12, 1);
    board.set(3, 13, 7);
    board.set(3, 11, 6);

    let result = board.sweep();
    assert_eq!(result.cleared, 2);
    assert_eq!(result.score_delta, 30);
    assert_eq!(board.get(3, 14), Some(7));
    assert_eq!(board.get(3, 13), Some(6));
    assert_eq!(board.get(3, 12), Some(EMPTY));
}

#[test]
fn test_sweep_four_rows_pays_doubling() {
    let mut board = Arena::new();
    for y in 11..15 {
        fill_row(&mut board, y, 5);
    }
    let result = board.sweep();
    assert_eq!(result.cleared, 4);
    assert_eq!(result.score_delta, 10 + 20 + 40 + 80);
    assert!(board.is_empty());
}

#[test]
fn test_sweep_ignores_top_row() {
    let mut board = Arena::new();
    fill_row(&mut board, 0, 1);

    let result = board.sweep();
    assert_eq!(result.cleared, 0);
    assert!(board.is_row_full(0));
}

#[test]
fn test_small_board_uses_same_rules() {
    let mut board: Board<4, 3> = Board::new();
    for x in 0..3 {
        board.set(x, 3, 1);
    }
    board.set(1, 2, 2);

    let result = board.sweep();
    assert_eq!(result.cleared, 1);
    assert_eq!(board.get(1, 3), Some(2));
}

#[test]
fn test_flat_layout_is_row_major() {
    let mut board = Arena::new();
    board.set(3, 1, 5);

    let mut flat = Vec::new();
    board.write_flat(&mut flat);
    assert_eq!(flat.len(), BOARD_ROWS * BOARD_COLS);
    assert_eq!(flat[BOARD_COLS + 3], 5);

    let back = Arena::from_flat(&flat).unwrap();
    assert_eq!(back, board);
    assert!(Arena::from_flat(&flat[1..]).is_none());
}
