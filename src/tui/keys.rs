/// Keyboard event to action mapping
///
/// Digits fire menu actions directly, arrows move the menu selection and the
/// visible panel, and `q` quits.
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::trace;

use super::action::Action;
use super::state::AppState;

/// Handle global keys that work regardless of state
fn handle_global_keys(key: &KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        _ => None,
    }
}

/// Map digit keys 1-9 to the menu action at that position
fn handle_shortcut_keys(key_code: KeyCode, state: &AppState) -> Option<Action> {
    let KeyCode::Char(c) = key_code else {
        return None;
    };
    let digit = c.to_digit(10)? as usize;
    if digit == 0 || digit > state.action_count() {
        return None;
    }
    Some(Action::TriggerIndex(digit - 1))
}

fn handle_navigation_keys(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::Up | KeyCode::Char('k') => Some(Action::SelectPreviousAction),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::SelectNextAction),
        KeyCode::Enter => Some(Action::TriggerSelected),
        KeyCode::Left | KeyCode::BackTab => Some(Action::PreviousTab),
        KeyCode::Right | KeyCode::Tab => Some(Action::NextTab),
        _ => None,
    }
}

/// Convert a key event to an action
pub fn key_to_action(key: KeyEvent, state: &AppState) -> Option<Action> {
    trace!("KEY: {:?}", key);
    handle_global_keys(&key)
        .or_else(|| handle_shortcut_keys(key.code, state))
        .or_else(|| handle_navigation_keys(key.code))
}
