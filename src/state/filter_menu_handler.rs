//! Keyboard handler for the filter dropdown.

use crossterm::event::{KeyCode, KeyEvent};
use tracing::debug;

use crate::state::AppState;

/// Handle keyboard input while the filter dropdown is open.
///
/// Returns `true` if the key was consumed by the dropdown, `false` otherwise.
///
/// # Key Bindings
/// - Up/k, Down/j: Move the highlight (wraps)
/// - Enter/Space: Choose the highlighted option
/// - Esc/f: Close without changing the filter
///
/// Any other key is swallowed while the dropdown is open, except `q`.
pub fn handle_filter_menu_key(state: &mut AppState, key: KeyEvent) -> bool {
    if !state.menu.is_open() {
        return false;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            state.menu = state.menu.moved(-1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.menu = state.menu.moved(1);
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            if let Some(option) = state.menu.highlighted() {
                debug!(filter = option.as_str(), "Filter chosen");
                state.set_filter(option);
            }
        }
        KeyCode::Esc | KeyCode::Char('f') => {
            state.menu = state.menu.toggled(state.filter);
        }
        KeyCode::Char('q') => return false,
        _ => {}
    }
    true
}
