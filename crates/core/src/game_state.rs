//! Game state module - the local player's state machine
//!
//! Ties together the board, piece matrices, the next queue, the hold slot,
//! scoring and the drop timer. All commands are plain `&mut self` methods
//! that run to completion; the caller serializes them (see `session`).

use crate::board::{Anchor, Arena, MergeOutcome};
use crate::pieces::{piece, Matrix};
use crate::queue::NextQueue;
use crate::rng::SimpleRng;
use crate::rotation::{resolve_rotation, RotationOutcome};
use crate::scoring::LevelProgress;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::timer::DropTimer;
use crate::types::*;

/// The falling piece: its matrix and where its bounding box sits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub anchor: Anchor,
    pub matrix: Matrix,
}

impl ActivePiece {
    /// Place a matrix at the top-center spawn anchor
    pub fn spawn(matrix: Matrix) -> Self {
        let x = (BOARD_COLS / 2) as i8 - (matrix.width() / 2) as i8;
        Self {
            anchor: Anchor::new(x, 0),
            matrix,
        }
    }
}

/// Complete local game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Arena,
    active: Option<ActivePiece>,
    hold: Option<Matrix>,
    next: NextQueue,
    rng: SimpleRng,
    phase: Phase,
    score: u32,
    progress: LevelProgress,
    lines: u32,
    timer: DropTimer,
    /// Bumped on every visible change; the session uses it to publish state.
    revision: u64,
    pieces_locked: u32,
    /// Number of games ended by a lock overlap.
    games_over: u32,
}

impl GameState {
    /// Create an idle game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let next = NextQueue::new(&mut rng);

        Self {
            board: Arena::new(),
            active: None,
            hold: None,
            next,
            rng,
            phase: Phase::Idle,
            score: 0,
            progress: LevelProgress::new(),
            lines: 0,
            timer: DropTimer::new(),
            revision: 0,
            pieces_locked: 0,
            games_over: 0,
        }
    }

    /// Start a fresh game (also restarts a running or finished one)
    pub fn start(&mut self) {
        self.board.clear();
        self.hold = None;
        self.next = NextQueue::new(&mut self.rng);
        self.score = 0;
        self.lines = 0;
        self.progress = LevelProgress::new();

        // The first piece is drawn fresh; the queue is only consumed by later spawns.
        let first = piece(self.rng.next_kind());
        self.active = Some(ActivePiece::spawn(first));
        self.timer.start();
        self.phase = Phase::Running;
        self.touch();
        log::info!("game started (seed {})", self.rng.seed());
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn board(&self) -> &Arena {
        &self.board
    }

    #[doc(hidden)]
    pub fn board_mut(&mut self) -> &mut Arena {
        &mut self.board
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    #[doc(hidden)]
    pub fn set_active(&mut self, piece: Option<ActivePiece>) {
        self.active = piece;
    }

    pub fn hold_piece(&self) -> Option<Matrix> {
        self.hold
    }

    pub fn next_queue(&self) -> &[Matrix] {
        self.next.pieces()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.progress.level()
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Current gravity threshold in time units
    pub fn drop_interval(&self) -> f64 {
        self.progress.drop_interval()
    }

    /// Drop accumulator; `None` while the timer is inactive
    pub fn drop_timer(&self) -> Option<u32> {
        self.timer.accumulated()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Pieces merged into the board since the process started
    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn games_over(&self) -> u32 {
        self.games_over
    }

    pub fn seed(&self) -> u32 {
        self.rng.seed()
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    /// Active piece, but only while gameplay is live
    fn live_piece(&self) -> Option<ActivePiece> {
        if self.phase != Phase::Running {
            return None;
        }
        self.active
    }

    /// Shift one column; rejected (false) if the new position collides
    pub fn move_horizontal(&mut self, dir: i8) -> bool {
        let Some(active) = self.live_piece() else {
            return false;
        };

        let target = active.anchor.offset(dir.signum(), 0);
        if self.board.collide(&active.matrix, target) {
            return false;
        }

        self.active = Some(ActivePiece {
            anchor: target,
            ..active
        });
        self.touch();
        true
    }

    /// Move down one row, or lock if the row below is blocked
    pub fn soft_drop(&mut self) -> bool {
        let Some(active) = self.live_piece() else {
            return false;
        };

        let below = active.anchor.offset(0, 1);
        if self.board.collide(&active.matrix, below) {
            self.lock(active);
        } else {
            self.active = Some(ActivePiece {
                anchor: below,
                ..active
            });
        }

        if self.phase == Phase::Running {
            self.timer.reset();
        }
        self.touch();
        true
    }

    /// Rows the active piece can fall before it would collide.
    ///
    /// A piece that already overlaps the stack gets 0, so a hard drop locks it
    /// in place and the merge ends the game.
    pub fn drop_distance(&self) -> Option<i8> {
        let active = self.active?;
        if self.board.collide(&active.matrix, active.anchor) {
            return Some(0);
        }
        let mut distance: i8 = 0;
        while distance <= BOARD_ROWS as i8
            && !self
                .board
                .collide(&active.matrix, active.anchor.offset(0, distance + 1))
        {
            distance += 1;
        }
        Some(distance)
    }

    /// Landing row of the active piece (ghost position)
    pub fn ghost_y(&self) -> Option<i8> {
        let active = self.active?;
        Some(active.anchor.y + self.drop_distance()?)
    }

    /// Drop to the lowest collision-free row and lock. Returns rows fallen.
    pub fn hard_drop(&mut self) -> Option<u32> {
        let active = self.live_piece()?;
        let distance = self.drop_distance()?;

        let landed = ActivePiece {
            anchor: active.anchor.offset(0, distance),
            ..active
        };
        self.lock(landed);

        if self.phase == Phase::Running {
            self.timer.reset();
        }
        self.touch();
        Some(distance as u32)
    }

    /// Rotate with wall kicks; false (and no change) when rejected
    pub fn rotate(&mut self, direction: Direction) -> bool {
        let Some(mut active) = self.live_piece() else {
            return false;
        };

        match resolve_rotation(&self.board, &mut active.matrix, active.anchor, direction) {
            RotationOutcome::Rotated { x } => {
                active.anchor.x = x;
                self.active = Some(active);
                self.touch();
                true
            }
            RotationOutcome::Rejected => false,
        }
    }

    /// Store the active piece; spawn from the queue or swap with the held one
    pub fn hold(&mut self) -> bool {
        let Some(active) = self.live_piece() else {
            return false;
        };

        let incoming = match self.hold.replace(active.matrix) {
            Some(held) => held,
            None => self.next.advance(&mut self.rng),
        };
        self.active = Some(ActivePiece::spawn(incoming));
        self.touch();
        true
    }

    /// Merge the piece, then spawn and sweep; a merge overlap ends the game
    fn lock(&mut self, piece: ActivePiece) {
        match self.board.merge(&piece.matrix, piece.anchor) {
            MergeOutcome::Overlap => self.end_game(),
            MergeOutcome::Merged => {
                self.pieces_locked += 1;
                let next = self.next.advance(&mut self.rng);
                self.active = Some(ActivePiece::spawn(next));

                let sweep = self.board.sweep();
                self.score = self.score.saturating_add(sweep.score_delta);
                self.lines += sweep.cleared;
                if self.progress.update(self.score) {
                    log::debug!(
                        "level {} reached, drop interval {:.1}",
                        self.progress.level(),
                        self.progress.drop_interval()
                    );
                }
            }
        }
    }

    fn end_game(&mut self) {
        log::info!("lock overlap: game over with score {}", self.score);
        self.phase = Phase::GameOver;
        self.timer.stop();
        self.active = None;
        self.board.clear();
        self.games_over += 1;
    }

    /// Advance the drop timer by one quantum; true if gravity fired
    pub fn tick(&mut self) -> bool {
        if self.phase != Phase::Running {
            return false;
        }

        if self
            .timer
            .advance(TICK_QUANTUM, self.progress.drop_interval())
        {
            self.soft_drop();
            return true;
        }
        false
    }

    /// Apply a game action.
    ///
    /// `ToggleReady` belongs to the session and is ignored here.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_horizontal(-1),
            GameAction::MoveRight => self.move_horizontal(1),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => self.hard_drop().is_some(),
            GameAction::RotateCw => self.rotate(Direction::Clockwise),
            GameAction::RotateCcw => self.rotate(Direction::CounterClockwise),
            GameAction::Hold => self.hold(),
            GameAction::Start => {
                self.start();
                true
            }
            GameAction::ToggleReady => false,
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board = *self.board.grid();
        out.active = self.active.map(ActiveSnapshot::from);
        out.ghost_y = self.ghost_y();
        out.hold = self.hold;
        out.next_queue.copy_from_slice(self.next.pieces());
        out.phase = self.phase;
        out.score = self.score;
        out.level = self.progress.level();
        out.lines = self.lines;
        out.drop_timer = self.timer.accumulated();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
