use duel_tetris::core::{GameSnapshot, OpponentView, Session};
use duel_tetris::term::game_view::{GAME_OVER, START_HINT};
use duel_tetris::term::{cell_color, FrameBuffer, GameView, Viewport};
use duel_tetris::types::{GameAction, Phase};

fn find_text(fb: &FrameBuffer, needle: &str) -> Option<(u16, u16)> {
    (0..fb.height()).find_map(|y| {
        let row: Vec<char> = fb.row_text(y).chars().collect();
        let needle: Vec<char> = needle.chars().collect();
        row.windows(needle.len())
            .position(|w| w == needle.as_slice())
            .map(|x| (x as u16, y))
    })
}

fn running_snapshot() -> GameSnapshot {
    let mut session = Session::new(42);
    session.game_mut().apply_action(GameAction::Start);
    session.snapshot()
}

#[test]
fn idle_screen_prompts_to_start() {
    let view = GameView::default();
    let fb = view.render(&GameSnapshot::default(), Viewport::new(80, 24));
    assert!(find_text(&fb, START_HINT).is_some());
    assert!(find_text(&fb, "R TO READY UP").is_some());
    assert!(find_text(&fb, GAME_OVER).is_none());
}

#[test]
fn game_over_screen_shows_both_lines() {
    let snap = GameSnapshot {
        phase: Phase::GameOver,
        score: 120,
        ..GameSnapshot::default()
    };
    let fb = GameView::default().render(&snap, Viewport::new(80, 24));
    let (_, over_y) = find_text(&fb, GAME_OVER).unwrap();
    let (_, hint_y) = find_text(&fb, START_HINT).unwrap();
    assert_eq!(hint_y, over_y + 1);
    assert!(find_text(&fb, "120").is_some());
}

#[test]
fn active_piece_is_drawn_in_its_color() {
    let snap = running_snapshot();
    let active = snap.active.unwrap();
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let fb = view.render(&snap, viewport);
    let layout = view.layout(viewport);

    let (dx, dy, v) = active.matrix.occupied().next().unwrap();
    let col = (active.x + dx) as u16;
    let row = (active.y + dy) as u16;
    let glyph = fb
        .get(layout.board_x + 1 + col * 2, layout.top + 2 + row)
        .unwrap();
    assert_eq!(glyph.ch, '█');
    assert_eq!(glyph.style.fg, cell_color(v));
    assert!(find_text(&fb, START_HINT).is_none());
}

#[test]
fn ghost_marks_landing_rows() {
    let snap = running_snapshot();
    let active = snap.active.unwrap();
    let ghost_y = snap.ghost_y.unwrap();
    assert!(ghost_y > active.y);

    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let fb = view.render(&snap, viewport);
    let layout = view.layout(viewport);

    let (dx, dy, _) = active.matrix.occupied().last().unwrap();
    let col = (active.x + dx) as u16;
    let row = (ghost_y + dy) as u16;
    let glyph = fb
        .get(layout.board_x + 1 + col * 2, layout.top + 2 + row)
        .unwrap();
    assert_eq!(glyph.ch, '░');
}

#[test]
fn paired_opponent_board_and_score_are_shown() {
    let mut opponent = OpponentView {
        score: 310,
        level: 3,
        ..OpponentView::default()
    };
    opponent.board.set(0, 14, 7);

    let snap = GameSnapshot {
        opponent,
        ready: true,
        paired: true,
        ..running_snapshot()
    };
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let fb = view.render(&snap, viewport);
    let layout = view.layout(viewport);

    let glyph = fb.get(layout.opponent_x + 1, layout.top + 2 + 14).unwrap();
    assert_eq!(glyph.style.fg, cell_color(7));
    assert!(find_text(&fb, "SCORE 310").is_some());
    assert!(find_text(&fb, "LV 3").is_some());
    assert!(find_text(&fb, "READY").is_some());
    assert!(find_text(&fb, "WAITING...").is_none());
}

#[test]
fn ready_without_opponent_is_waiting() {
    let snap = GameSnapshot {
        ready: true,
        ..GameSnapshot::default()
    };
    let fb = GameView::default().render(&snap, Viewport::new(80, 24));
    assert!(find_text(&fb, "WAITING...").is_some());
}

#[test]
fn tiny_viewport_does_not_panic() {
    let view = GameView::default();
    let snap = running_snapshot();
    for (w, h) in [(0, 0), (1, 1), (20, 5), (40, 10)] {
        let mut fb = FrameBuffer::new(0, 0);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        assert_eq!((fb.width(), fb.height()), (w, h));
    }
}
