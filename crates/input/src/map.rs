//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key event to a game action.
///
/// `Up` rotates, `Left`/`Right` move. Key releases are ignored; presses and
/// terminal auto-repeat both count, the same way a held key keeps firing.
pub fn action_for_key(key: KeyEvent) -> Option<GameAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Left => Some(GameAction::MoveLeft),
        KeyCode::Right => Some(GameAction::MoveRight),
        KeyCode::Up => Some(GameAction::Rotate),
        _ => None,
    }
}

/// Map a DOM-style key identifier (`"ArrowLeft"`, ...) to a game action.
pub fn action_for_key_name(name: &str) -> Option<GameAction> {
    GameAction::from_key_name(name)
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Check if key closes the game-over notice.
pub fn is_dismiss_key(key: KeyEvent) -> bool {
    key.kind == KeyEventKind::Press && !should_quit(key)
}
