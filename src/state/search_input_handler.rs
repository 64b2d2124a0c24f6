//! Keyboard handler for the focused search input.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use crate::state::AppState;

/// Handle keyboard input while the search input has focus.
///
/// Returns `true` if the key was consumed, `false` to fall through to the
/// regular key bindings.
///
/// # Key Bindings
/// - Printable characters: insert at the cursor
/// - Backspace/Delete: remove before/under the cursor
/// - Left/Right/Home/End: move the cursor
/// - Esc/Enter: leave the input
///
/// Control and Alt chords fall through, as do navigation keys such as
/// Up/Down and PageUp/PageDown, so the grid stays reachable while typing.
pub fn handle_search_key(state: &mut AppState, key: KeyEvent) -> bool {
    if !state.search.is_focused() {
        return false;
    }

    let edited = match key.code {
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            state.search.insert_char(ch);
            true
        }
        KeyCode::Backspace => state.search.backspace(),
        KeyCode::Delete => state.search.delete(),
        KeyCode::Left => {
            state.search.cursor_left();
            false
        }
        KeyCode::Right => {
            state.search.cursor_right();
            false
        }
        KeyCode::Home => {
            state.search.cursor_home();
            false
        }
        KeyCode::End => {
            state.search.cursor_end();
            false
        }
        KeyCode::Esc | KeyCode::Enter => {
            state.search.blur();
            return true;
        }
        _ => return false,
    };

    if edited {
        state.refilter();
        debug!(query = state.search.query(), "Search query changed");
    }
    // Typing shows the caret immediately rather than mid-blink.
    state.caret_visible = true;
    true
}

#[cfg(test)]
#[path = "search_input_handler_tests.rs"]
mod tests;
