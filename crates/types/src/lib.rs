//! Shared types and constants for the duel game.
//!
//! Everything here is plain data with no dependencies, so the engine, the
//! terminal renderer, the key mapper and the sync adapter can all agree on the
//! same vocabulary.
//!
//! # Board Dimensions
//!
//! - **Rows**: 15 (indexed 0-14, top to bottom)
//! - **Cols**: 10 (indexed 0-9, left to right)
//! - **Pieces**: 4x4 bounding box, spawned at the top-center anchor (3, 0)
//!
//! # Timing
//!
//! Time is measured in abstract units that the game binary maps 1:1 to
//! milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_QUANTUM` | 10 | Added to the drop accumulator on every tick |
//! | `BASE_DROP_INTERVAL` | 500.0 | Drop threshold at level 1 |
//! | `LEVEL_UP_FACTOR` | 0.9 | Threshold multiplier per level-up |
//!
//! # Examples
//!
//! ```
//! use duel_tetris_types::{GameAction, PieceKind, BOARD_COLS, BOARD_ROWS};
//!
//! assert_eq!(PieceKind::from_id(5), Some(PieceKind::I));
//! assert_eq!(PieceKind::I.id(), 5);
//! assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
//! assert_eq!((BOARD_ROWS, BOARD_COLS), (15, 10));
//! ```

/// Number of board rows
pub const BOARD_ROWS: usize = 15;

/// Number of board columns
pub const BOARD_COLS: usize = 10;

/// Side length of the square bounding box every canonical piece lives in
pub const PIECE_SIZE: usize = 4;

/// Depth of the next-piece lookahead queue
pub const NEXT_QUEUE_LEN: usize = 3;

/// Amount added to the drop accumulator per tick
pub const TICK_QUANTUM: u32 = 10;

/// Wall-clock tick period used by the game binary (one quantum per tick)
pub const TICK_MS: u64 = 10;

/// Drop interval at level 1
pub const BASE_DROP_INTERVAL: f64 = 500.0;

/// Multiplier applied to the drop interval on each level-up
pub const LEVEL_UP_FACTOR: f64 = 0.9;

/// Score needed per level (`level * LEVEL_SCORE_STEP`)
pub const LEVEL_SCORE_STEP: u32 = 100;

/// Award for the first cleared row in a sweep; doubles for each further row
pub const CLEAR_BASE_SCORE: u32 = 10;

/// A board or piece cell: 0 = empty, 1-7 = piece color index.
pub type Cell = u8;

/// Empty cell value
pub const EMPTY: Cell = 0;

/// The seven canonical piece kinds.
///
/// The discriminant is the cell value the piece paints onto the board, which
/// doubles as its color index:
///
/// | Id | Kind | Color |
/// |----|------|-------|
/// | 1 | T | purple |
/// | 2 | O | yellow |
/// | 3 | L | orange |
/// | 4 | J | blue |
/// | 5 | I | cyan |
/// | 6 | S | green |
/// | 7 | Z | red |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    T = 1,
    O = 2,
    L = 3,
    J = 4,
    I = 5,
    S = 6,
    Z = 7,
}

impl PieceKind {
    /// All kinds in id order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::T,
        PieceKind::O,
        PieceKind::L,
        PieceKind::J,
        PieceKind::I,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Map a type identifier (1..=7) to a kind
    ///
    /// # Examples
    ///
    /// ```
    /// use duel_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_id(1), Some(PieceKind::T));
    /// assert_eq!(PieceKind::from_id(0), None);
    /// assert_eq!(PieceKind::from_id(8), None);
    /// ```
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(PieceKind::T),
            2 => Some(PieceKind::O),
            3 => Some(PieceKind::L),
            4 => Some(PieceKind::J),
            5 => Some(PieceKind::I),
            6 => Some(PieceKind::S),
            7 => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Type identifier, also the cell value painted by this piece
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Single-letter name
    pub fn as_str(self) -> &'static str {
        match self {
            PieceKind::T => "T",
            PieceKind::O => "O",
            PieceKind::L => "L",
            PieceKind::J => "J",
            PieceKind::I => "I",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
        }
    }
}

/// Rotation direction.
///
/// Commands carry it as a sign: `+1` is clockwise, `-1` counter-clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    /// Positive sign is clockwise, anything else counter-clockwise
    pub fn from_sign(dir: i8) -> Self {
        if dir > 0 {
            Direction::Clockwise
        } else {
            Direction::CounterClockwise
        }
    }

    pub fn reverse(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// Lifecycle of the local game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// No game started yet
    #[default]
    Idle,
    /// Active piece present, drop timer running
    Running,
    /// Terminal state after a lock overlap; piece absent, timer stopped
    GameOver,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Running => "running",
            Phase::GameOver => "gameOver",
        }
    }
}

/// Discrete commands delivered by the input adapter.
///
/// Each maps 1:1 to an engine entry point. Held keys arrive as repeated
/// events; there is no debounce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Drop one row, locking if blocked
    SoftDrop,
    /// Drop to the lowest free row and lock
    HardDrop,
    /// Rotate 90° clockwise with wall kicks
    RotateCw,
    /// Rotate 90° counter-clockwise with wall kicks
    RotateCcw,
    /// Swap the active piece with the hold slot
    Hold,
    /// Start (or restart) a game
    Start,
    /// Toggle readiness for a two-player match
    ToggleReady,
}

impl GameAction {
    /// Parse an action from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use duel_tetris_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("TOGGLEREADY"), Some(GameAction::ToggleReady));
    /// assert_eq!(GameAction::from_str("pause"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "harddrop" => Some(GameAction::HardDrop),
            "rotatecw" => Some(GameAction::RotateCw),
            "rotateccw" => Some(GameAction::RotateCcw),
            "hold" => Some(GameAction::Hold),
            "start" => Some(GameAction::Start),
            "toggleready" => Some(GameAction::ToggleReady),
            _ => None,
        }
    }

    /// camelCase name
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::RotateCw => "rotateCw",
            GameAction::RotateCcw => "rotateCcw",
            GameAction::Hold => "hold",
            GameAction::Start => "start",
            GameAction::ToggleReady => "toggleReady",
        }
    }
}
