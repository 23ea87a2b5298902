//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. There is no
//! repeat handling of our own: the terminal's key repeat delivers held keys
//! as a stream of presses, and each one becomes an action.

pub mod map;

pub use duel_tetris_types as types;

pub use map::{handle_key_event, should_quit};
