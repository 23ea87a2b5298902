//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! Pure (no I/O), so layouts can be unit-tested. Layout, left to right:
//! hold and stats panel, local board, next panel, opponent board.

use crate::core::{GameSnapshot, Matrix};
use crate::fb::{FrameBuffer, Glyph, Rgb, Style};
use crate::types::{Cell, Phase, BOARD_COLS, BOARD_ROWS, EMPTY};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const PANEL_W: u16 = 12;
const GAP: u16 = 1;

const BOARD_BG: Rgb = Rgb::new(20, 20, 28);
const TEXT: Style = Style::new(Rgb::new(210, 210, 210), Rgb::new(0, 0, 0));
const LABEL: Style = TEXT.bold();
const BORDER: Style = Style::new(Rgb::new(170, 170, 180), Rgb::new(0, 0, 0));

pub const START_HINT: &str = "PRESS N TO START";
pub const GAME_OVER: &str = "GAME OVER";

/// Screen color for a cell value: black, purple, yellow, orange, blue, cyan,
/// green, red for 0..=7.
pub fn cell_color(cell: Cell) -> Rgb {
    match cell {
        1 => Rgb::new(160, 32, 240),
        2 => Rgb::new(240, 220, 0),
        3 => Rgb::new(255, 140, 0),
        4 => Rgb::new(40, 80, 230),
        5 => Rgb::new(0, 220, 230),
        6 => Rgb::new(40, 200, 60),
        7 => Rgb::new(230, 40, 40),
        _ => Rgb::new(0, 0, 0),
    }
}

/// Where each area lands for a given viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub left_panel_x: u16,
    pub board_x: u16,
    pub right_panel_x: u16,
    pub opponent_x: u16,
    pub top: u16,
}

pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell keeps cells roughly square.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    fn frame_w(&self) -> u16 {
        BOARD_COLS as u16 * self.cell_w + 2
    }

    fn frame_h(&self) -> u16 {
        BOARD_ROWS as u16 + 2
    }

    /// Total size of the drawing, header and footer rows included.
    pub fn content_size(&self) -> (u16, u16) {
        let w = 2 * PANEL_W + 2 * self.frame_w() + 3 * GAP;
        (w, self.frame_h() + 2)
    }

    pub fn layout(&self, viewport: Viewport) -> Layout {
        let (w, h) = self.content_size();
        let left_panel_x = viewport.width.saturating_sub(w) / 2;
        let board_x = left_panel_x + PANEL_W + GAP;
        let right_panel_x = board_x + self.frame_w() + GAP;
        let opponent_x = right_panel_x + PANEL_W + GAP;
        Layout {
            left_panel_x,
            board_x,
            right_panel_x,
            opponent_x,
            top: viewport.height.saturating_sub(h) / 2,
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Style::default().glyph(' '));

        let layout = self.layout(viewport);
        let board_top = layout.top + 1;

        // Local side.
        fb.put_str(layout.board_x, layout.top, "YOU", LABEL);
        self.draw_board(fb, layout.board_x, board_top, &snap.board);
        if let (Some(active), Some(ghost_y)) = (snap.active, snap.ghost_y) {
            let ghost = Style::new(Rgb::new(110, 110, 120), BOARD_BG).dim();
            let at = (active.x, ghost_y);
            self.draw_matrix_on_board(fb, layout.board_x, board_top, &active.matrix, at, |_| {
                ghost.glyph('░')
            });
        }
        if let Some(active) = snap.active {
            let at = (active.x, active.y);
            self.draw_matrix_on_board(fb, layout.board_x, board_top, &active.matrix, at, block);
        }
        match snap.phase {
            Phase::Idle => self.draw_overlay(fb, layout.board_x, board_top, &[START_HINT]),
            Phase::GameOver => {
                self.draw_overlay(fb, layout.board_x, board_top, &[GAME_OVER, START_HINT])
            }
            Phase::Running => {}
        }

        self.draw_left_panel(fb, snap, layout.left_panel_x, board_top);
        self.draw_next_panel(fb, snap, layout.right_panel_x, board_top);

        // Opponent side.
        fb.put_str(layout.opponent_x, layout.top, "OPPONENT", LABEL);
        let opponent = snap.opponent.board.grid();
        self.draw_board(fb, layout.opponent_x, board_top, opponent);

        let footer = board_top + self.frame_h();
        if snap.paired {
            let mut x = layout.opponent_x;
            fb.put_str(x, footer, "SCORE ", TEXT);
            x += 6;
            x += fb.put_u32(x, footer, snap.opponent.score, TEXT);
            fb.put_str(x + 1, footer, "LV ", TEXT);
            fb.put_u32(x + 4, footer, snap.opponent.level, TEXT);
        } else {
            let msg = if snap.ready { "WAITING..." } else { "R TO READY UP" };
            self.draw_overlay(fb, layout.opponent_x, board_top, &[msg]);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_board(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        grid: &[[Cell; BOARD_COLS]; BOARD_ROWS],
    ) {
        fb.draw_box(x, y, self.frame_w(), self.frame_h(), BORDER);
        let empty = Style::new(Rgb::new(60, 60, 70), BOARD_BG).dim();
        for (row, cells) in grid.iter().enumerate() {
            for (col, &v) in cells.iter().enumerate() {
                let glyph = if v == EMPTY { empty.glyph('·') } else { block(v) };
                self.fill_board_cell(fb, x, y, col as u16, row as u16, glyph);
            }
        }
    }

    fn draw_matrix_on_board(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        matrix: &Matrix,
        (at_x, at_y): (i8, i8),
        glyph: impl Fn(Cell) -> Glyph,
    ) {
        for (dx, dy, v) in matrix.occupied() {
            let col = at_x + dx;
            let row = at_y + dy;
            if (0..BOARD_COLS as i8).contains(&col) && (0..BOARD_ROWS as i8).contains(&row) {
                self.fill_board_cell(fb, x, y, col as u16, row as u16, glyph(v));
            }
        }
    }

    fn fill_board_cell(
        &self,
        fb: &mut FrameBuffer,
        frame_x: u16,
        frame_y: u16,
        col: u16,
        row: u16,
        glyph: Glyph,
    ) {
        let px = frame_x + 1 + col * self.cell_w;
        let py = frame_y + 1 + row;
        fb.fill_rect(px, py, self.cell_w, 1, glyph.ch, glyph.style);
    }

    /// Rows of the matrix that contain a block, drawn compactly. Returns rows used.
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, matrix: &Matrix) -> u16 {
        let mut used = 0;
        for row in matrix.rows() {
            if row.iter().all(|&v| v == EMPTY) {
                continue;
            }
            for (col, &v) in row.iter().enumerate() {
                if v != EMPTY {
                    let g = block(v);
                    let px = x + col as u16 * self.cell_w;
                    fb.fill_rect(px, y + used, self.cell_w, 1, g.ch, g.style);
                }
            }
            used += 1;
        }
        used
    }

    fn draw_left_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, top: u16) {
        let mut y = top;
        fb.put_str(x, y, "HOLD", LABEL);
        y += 1;
        match snap.hold {
            Some(held) => {
                self.draw_preview(fb, x + 1, y, &held);
            }
            None => fb.put_str(x + 1, y, "-", TEXT),
        }
        y += 5;

        for (label, value) in [
            ("SCORE", snap.score),
            ("LEVEL", snap.level),
            ("LINES", snap.lines),
        ] {
            fb.put_str(x, y, label, LABEL);
            fb.put_u32(x, y + 1, value, TEXT);
            y += 3;
        }

        let (status, style) = if snap.ready {
            ("READY", Style::new(Rgb::new(80, 220, 100), Rgb::new(0, 0, 0)).bold())
        } else {
            ("NOT READY", TEXT.dim())
        };
        fb.put_str(x, y, status, style);
    }

    fn draw_next_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, top: u16) {
        fb.put_str(x, top, "NEXT", LABEL);
        let mut y = top + 1;
        if snap.phase == Phase::Idle {
            return;
        }
        for next in snap.next_queue.iter() {
            y += self.draw_preview(fb, x + 1, y, next) + 1;
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, frame_x: u16, frame_y: u16, lines: &[&str]) {
        let style = Style::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        let mid = frame_y + self.frame_h() / 2 - (lines.len() as u16) / 2;
        for (i, text) in lines.iter().enumerate() {
            let text_w = text.chars().count() as u16;
            let x = frame_x + self.frame_w().saturating_sub(text_w) / 2;
            fb.put_str(x, mid + i as u16, text, style);
        }
    }
}

fn block(v: Cell) -> Glyph {
    Style::new(cell_color(v), BOARD_BG).bold().glyph('█')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_fits_eighty_columns() {
        let (w, h) = GameView::default().content_size();
        assert!(w <= 80, "width {w}");
        assert!(h <= 24, "height {h}");
    }

    #[test]
    fn cell_colors_follow_palette() {
        assert_eq!(cell_color(0), Rgb::new(0, 0, 0));
        assert_eq!(cell_color(5), Rgb::new(0, 220, 230));
        assert_eq!(cell_color(7), Rgb::new(230, 40, 40));
        assert_eq!(cell_color(200), Rgb::new(0, 0, 0));
    }

    #[test]
    fn idle_shows_start_hint() {
        let view = GameView::default();
        let fb = view.render(&GameSnapshot::default(), Viewport::new(80, 24));
        let found = (0..fb.height()).any(|y| fb.row_text(y).contains(START_HINT));
        assert!(found);
    }
}
