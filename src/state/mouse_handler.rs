//! Mouse event handler.
//!
//! State transitions applied to AppState in response to mouse events.
//! The screen layout from the last draw decides what was clicked.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use tracing::debug;

use crate::state::{handle_wheel, AppState};
use crate::view_state::{HitContext, HitTestResult, ScreenLayout};

/// Hit-test context for the current state.
pub fn hit_context(state: &AppState) -> HitContext {
    HitContext {
        menu_open: state.menu.is_open(),
        result_count: state.results.len(),
        scroll_offset: state.results.scroll_offset(),
        indicator: state.results.indicator(),
    }
}

/// Pointer row relative to the top of the scrollbar track.
///
/// Negative above the track and past its length below it; the drag math
/// clamps the resulting offset.
fn track_pointer(row: u16, layout: &ScreenLayout) -> f64 {
    f64::from(row) - f64::from(layout.track.y)
}

/// Handle a mouse event and update AppState accordingly.
///
/// # Behavior
/// - Left press: closes an open dropdown when outside it, then acts on the
///   target (filter option, filter button, search bar, scrollbar thumb,
///   card). Pressing the thumb starts a drag; the bare track is inert.
/// - Left drag: moves an active thumb drag. Ignored when idle.
/// - Left release: ends the drag.
/// - Move: updates the hovered card.
/// - Wheel: scrolls the results.
pub fn handle_mouse_event(state: &mut AppState, event: MouseEvent, layout: &ScreenLayout) {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let hit = layout.hit_test(event.column, event.row, &hit_context(state));
            handle_press(state, hit, event.row, layout);
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            state.results.update_drag(track_pointer(event.row, layout));
        }
        MouseEventKind::Up(MouseButton::Left) => state.results.end_drag(),
        MouseEventKind::Moved => {
            let hit = layout.hit_test(event.column, event.row, &hit_context(state));
            state.results.set_hovered(hit.card());
        }
        MouseEventKind::ScrollDown => {
            handle_wheel(state, 1);
        }
        MouseEventKind::ScrollUp => {
            handle_wheel(state, -1);
        }
        _ => {}
    }
}

fn handle_press(state: &mut AppState, hit: HitTestResult, row: u16, layout: &ScreenLayout) {
    if state.menu.is_open() && !hit.is_filter_control() {
        state.menu = state.menu.toggled(state.filter);
    }
    if hit != HitTestResult::SearchBar {
        state.search.blur();
    }

    match hit {
        HitTestResult::FilterOption(option) => {
            debug!(filter = option.as_str(), "Filter chosen");
            state.set_filter(option);
        }
        HitTestResult::FilterButton => {
            state.menu = state.menu.toggled(state.filter);
        }
        HitTestResult::SearchBar => state.focus_search(),
        HitTestResult::Thumb => {
            state.results.begin_drag(track_pointer(row, layout));
        }
        HitTestResult::Card(position) => {
            state.results.select(position);
            state.results.toggle_lyrics(position);
        }
        HitTestResult::FilterMenu
        | HitTestResult::Track
        | HitTestResult::Results
        | HitTestResult::Outside => {}
    }
}

/// The terminal lost focus: release any pointer capture.
pub fn handle_focus_lost(state: &mut AppState) {
    state.results.capture_lost();
}

// ===== Tests =====

#[cfg(test)]
#[path = "mouse_handler_tests.rs"]
mod tests;
