//! Terminal rendering for the duel game.
//!
//! Snapshots are drawn into a plain framebuffer (no widget library), which is
//! then flushed to the terminal with diff encoding. Each board cell is two
//! columns wide to keep the aspect ratio close to square.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use duel_tetris_core as core;
pub use duel_tetris_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{cell_color, GameView, Layout, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
