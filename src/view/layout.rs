//! Screen composition.
//!
//! Draws every region of a precomputed [`ScreenLayout`]. The dropdown and
//! the help overlay are drawn last so they sit on top.

use super::filter_menu::{render_filter_button, render_filter_menu};
use super::help::render_help_overlay;
use super::results::render_results;
use super::search_input::SearchBar;
use super::styles::Theme;
use crate::state::AppState;
use crate::view_state::ScreenLayout;
use ratatui::{layout::Rect, text::Line, widgets::Paragraph, Frame};

/// Render the whole screen for `state` into `layout`.
pub fn render_layout(frame: &mut Frame, layout: &ScreenLayout, state: &AppState, theme: &Theme) {
    frame.render_widget(
        SearchBar::new(&state.search, state.caret_visible, theme),
        layout.search_bar,
    );
    render_filter_button(
        frame,
        layout.filter_button,
        state.filter_label(),
        state.menu.is_open(),
        theme,
    );
    render_results(frame, layout, state, theme);
    render_status_bar(frame, layout.status, state, theme);
    render_filter_menu(frame, layout.filter_menu, state.menu, state.filter, theme);

    if state.help_visible {
        render_help_overlay(frame, theme);
    }
}

/// Status text for the bottom line.
pub fn status_text(state: &AppState) -> String {
    if state.results.is_dragging() {
        let metrics = state.results.container().metrics();
        return format!(
            " Scrolling {:.0}/{:.0}",
            metrics.scroll_offset(),
            metrics.max_scroll_offset()
        );
    }
    if state.search.is_focused() {
        " Type to search · Esc done · ? help".to_string()
    } else {
        " ←↑↓→ select · Enter lyrics · j/k scroll · f filter · / search · q quit".to_string()
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let status = Paragraph::new(Line::from(status_text(state))).style(theme.status());
    frame.render_widget(status, area);
}
