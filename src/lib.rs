//! Duel Tetris (workspace facade crate).
//!
//! Re-exports the member crates under short names so binaries, tests and
//! benches can use `duel_tetris::{core, input, sync, term, types}`.

pub use duel_tetris_core as core;
pub use duel_tetris_input as input;
pub use duel_tetris_sync as sync;
pub use duel_tetris_term as term;
pub use duel_tetris_types as types;
