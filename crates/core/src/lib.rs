//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the game rules and the local player's state machine.
//! It has **no dependencies** on the terminal or the network, making it:
//!
//! - **Deterministic**: same seed, same piece sequence
//! - **Testable**: every rule is covered by unit tests
//! - **Allocation-free** on the hot path: boards and matrices are fixed arrays
//!
//! # Module Structure
//!
//! - [`board`]: 15x10 arena with collision, merge and row sweep
//! - [`pieces`]: piece matrices and the piece factory
//! - [`rotation`]: matrix rotation and the wall-kick resolver
//! - [`rng`] / [`queue`]: uniform piece draws and the 3-deep next queue
//! - [`scoring`]: sweep rewards and level progression
//! - [`timer`]: the accumulating drop timer
//! - [`game_state`]: start / move / drop / rotate / hold / tick
//! - [`session`]: serialized event queue shared by input, timer and opponent
//! - [`snapshot`]: render-ready copies of the state
//!
//! # Game Rules
//!
//! - Pieces are drawn uniformly at random; three upcoming pieces are visible
//! - Rotation tries the current column, then alternating kicks of growing
//!   distance, and gives up once the kick exceeds the piece width
//! - Hold swaps the falling piece with the stored one, with no per-piece limit
//! - Clearing rows pays 10, 20, 40, ... within one lock
//! - Each level shortens the drop interval by 10%
//! - A piece that cannot be merged where it locks ends the game
//!
//! # Example
//!
//! ```
//! use duel_tetris_core::GameState;
//! use duel_tetris_types::{GameAction, Phase};
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::RotateCw);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert_eq!(game.phase(), Phase::Running);
//! assert!(!game.board().is_empty());
//! ```
//!
//! # Timing
//!
//! The host calls [`GameState::tick`](game_state::GameState::tick) every
//! 10ms. Each tick adds 10 time units; gravity fires once the total exceeds
//! the drop interval (500 at level 1).

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod queue;
pub mod rng;
pub mod rotation;
pub mod scoring;
pub mod session;
pub mod snapshot;
pub mod timer;

pub use duel_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::{Anchor, Arena, Board, MergeOutcome, SweepResult};
pub use game_state::{ActivePiece, GameState};
pub use pieces::{create_piece, piece, Matrix};
pub use rng::SimpleRng;
pub use rotation::{resolve_rotation, rotate, RotationOutcome, TransformError};
pub use session::{Effect, Event, Session};
pub use snapshot::{ActiveSnapshot, GameSnapshot, OpponentView};
