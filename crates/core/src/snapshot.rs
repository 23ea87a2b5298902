use crate::board::{Anchor, Arena};
use crate::game_state::ActivePiece;
use crate::pieces::Matrix;
use crate::types::{Cell, Phase, BOARD_COLS, BOARD_ROWS, NEXT_QUEUE_LEN};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub matrix: Matrix,
    pub x: i8,
    pub y: i8,
}

impl ActiveSnapshot {
    pub fn anchor(&self) -> Anchor {
        Anchor::new(self.x, self.y)
    }
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            matrix: value.matrix,
            x: value.anchor.x,
            y: value.anchor.y,
        }
    }
}

/// What we know about the remote player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OpponentView {
    pub board: Arena,
    pub score: u32,
    pub level: u32,
}

impl Default for OpponentView {
    fn default() -> Self {
        Self {
            board: Arena::new(),
            score: 0,
            level: 1,
        }
    }
}

/// Render-ready copy of everything on screen
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GameSnapshot {
    pub board: [[Cell; BOARD_COLS]; BOARD_ROWS],
    pub active: Option<ActiveSnapshot>,
    pub ghost_y: Option<i8>,
    pub hold: Option<Matrix>,
    pub next_queue: [Matrix; NEXT_QUEUE_LEN],
    pub phase: Phase,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub drop_timer: Option<u32>,
    pub opponent: OpponentView,
    pub ready: bool,
    pub paired: bool,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn playable(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Board cells with the active piece drawn in
    pub fn composed_board(&self) -> [[Cell; BOARD_COLS]; BOARD_ROWS] {
        let mut out = self.board;
        if let Some(active) = self.active {
            for (dx, dy, v) in active.matrix.occupied() {
                let x = active.x + dx;
                let y = active.y + dy;
                if (0..BOARD_COLS as i8).contains(&x) && (0..BOARD_ROWS as i8).contains(&y) {
                    out[y as usize][x as usize] = v;
                }
            }
        }
        out
    }
}
