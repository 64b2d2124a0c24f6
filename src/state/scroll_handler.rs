//! Vertical scrolling keyboard action handler.
//!
//! State transitions applied to AppState in response to scroll actions.
//! Scrolling goes through the results container, so the scrollbar follows
//! on the next sync exactly as it does for wheel and drag input.

use crate::model::KeyAction;
use crate::state::AppState;
use tracing::trace;

/// Handle a scroll keyboard action.
///
/// # Arguments
/// * `state` - Current application state to transform
/// * `action` - The scroll action to handle
/// * `viewport_height` - Height of the visible grid in rows (for page scrolling)
///
/// Returns the applied offset, or `None` for non-scroll actions (which
/// leave the state unchanged).
pub fn handle_scroll_action(
    state: &mut AppState,
    action: KeyAction,
    viewport_height: usize,
) -> Option<f64> {
    let page = viewport_height.max(1) as f64;
    let container = state.results.container_mut();

    let applied = match action {
        KeyAction::ScrollUp => container.scroll_by(-1.0),
        KeyAction::ScrollDown => container.scroll_by(1.0),
        KeyAction::PageUp => container.scroll_by(-page),
        KeyAction::PageDown => container.scroll_by(page),
        KeyAction::ScrollToTop => container.scroll_to_top(),
        KeyAction::ScrollToBottom => container.scroll_to_bottom(),
        _ => return None,
    };

    trace!(?action, offset = applied, "Keyboard scroll");
    Some(applied)
}

/// Scroll by `notches` wheel notches (negative is up).
pub fn handle_wheel(state: &mut AppState, notches: i32) -> f64 {
    let step = f64::from(state.settings.wheel_step);
    state
        .results
        .container_mut()
        .scroll_by(f64::from(notches) * step)
}

#[cfg(test)]
#[path = "scroll_handler_tests.rs"]
mod tests;
