use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

use blockfall::input::{action_for_key, action_for_key_name, is_dismiss_key, should_quit};
use blockfall::types::GameAction;

fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind,
        state: KeyEventState::NONE,
    }
}

#[test]
fn arrow_keys_map_to_actions() {
    let press = |code| action_for_key(key(code, KeyEventKind::Press));
    assert_eq!(press(KeyCode::Left), Some(GameAction::MoveLeft));
    assert_eq!(press(KeyCode::Right), Some(GameAction::MoveRight));
    assert_eq!(press(KeyCode::Up), Some(GameAction::Rotate));
    assert_eq!(press(KeyCode::Down), None);
    assert_eq!(press(KeyCode::Char(' ')), None);
}

#[test]
fn key_names_map_to_actions() {
    assert_eq!(action_for_key_name("ArrowLeft"), Some(GameAction::MoveLeft));
    assert_eq!(action_for_key_name("ArrowRight"), Some(GameAction::MoveRight));
    assert_eq!(action_for_key_name("ArrowUp"), Some(GameAction::Rotate));
    assert_eq!(action_for_key_name("ArrowDown"), None);
    assert_eq!(action_for_key_name("arrowup"), None);
}

#[test]
fn any_non_quit_press_dismisses_notice() {
    assert!(is_dismiss_key(key(KeyCode::Char('x'), KeyEventKind::Press)));
    assert!(is_dismiss_key(key(KeyCode::Enter, KeyEventKind::Press)));
    assert!(!is_dismiss_key(key(KeyCode::Enter, KeyEventKind::Release)));
    assert!(!is_dismiss_key(key(KeyCode::Esc, KeyEventKind::Press)));
    assert!(should_quit(key(KeyCode::Char('q'), KeyEventKind::Press)));
}
