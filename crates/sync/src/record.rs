//! The document each player publishes to the relay.

use serde::{Deserialize, Serialize};

use duel_tetris_core::{Arena, GameState, OpponentView};
use duel_tetris_types::{Cell, BOARD_COLS, BOARD_ROWS};

use crate::error::{SyncError, SyncResult};

/// Public view of one player's game.
///
/// `arena` is the board flattened row-major (`index = row * cols + col`)
/// with the falling piece already drawn in, so the receiver needs no piece
/// logic to show it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub x: i8,
    pub y: i8,
    pub arena: Vec<Cell>,
    pub score: u32,
    pub level: u32,
}

impl Default for PlayerRecord {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            arena: vec![0; BOARD_ROWS * BOARD_COLS],
            score: 0,
            level: 1,
        }
    }
}

impl PlayerRecord {
    pub fn from_game(game: &GameState) -> Self {
        let snap = game.snapshot();
        let composed = snap.composed_board();
        let mut arena = Vec::with_capacity(BOARD_ROWS * BOARD_COLS);
        for row in &composed {
            arena.extend_from_slice(row);
        }

        let (x, y) = snap.active.map(|a| (a.x, a.y)).unwrap_or((0, 0));
        Self {
            x,
            y,
            arena,
            score: game.score(),
            level: game.level(),
        }
    }

    /// Rebuild the board for display on the other side.
    pub fn to_opponent(&self) -> SyncResult<OpponentView> {
        let board = Arena::from_flat(&self.arena).ok_or(SyncError::BadArena {
            expected: BOARD_ROWS * BOARD_COLS,
            actual: self.arena.len(),
        })?;
        Ok(OpponentView {
            board,
            score: self.score,
            level: self.level,
        })
    }
}

/// What the relay stores per player: the ready flag plus the latest record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlayerDoc {
    #[serde(default)]
    pub ready: bool,
    #[serde(flatten)]
    pub record: Option<PlayerRecord>,
}

impl PlayerDoc {
    pub fn ready(record: Option<PlayerRecord>) -> Self {
        Self {
            ready: true,
            record,
        }
    }
}
