//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to game actions.
///
/// Press and repeat events both map; release events (only reported by
/// terminals with the kitty protocol enabled) are ignored.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        // Movement
        KeyCode::Left => Some(GameAction::MoveLeft),
        KeyCode::Right => Some(GameAction::MoveRight),
        KeyCode::Down => Some(GameAction::SoftDrop),
        KeyCode::Up => Some(GameAction::HardDrop),

        // Rotation
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(GameAction::RotateCcw),
        KeyCode::Char('w') | KeyCode::Char('W') => Some(GameAction::RotateCw),

        // Actions
        KeyCode::Char('e') | KeyCode::Char('E') => Some(GameAction::Hold),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Enter => Some(GameAction::Start),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::ToggleReady),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
