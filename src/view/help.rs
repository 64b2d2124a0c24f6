//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal overlay with all keyboard shortcuts grouped by category.
//! Triggered by '?' key, dismissed by 'Esc' or '?'.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::helpers::{empty_line, key_value_line};
use super::styles::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const KEY_WIDTH: usize = 16;

/// Render the help overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame, theme: &Theme) {
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, frame.area());

    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(theme))
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(theme.control(true)),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1.min(popup_area.height),
    };

    let hint = Paragraph::new(Line::from(vec![Span::styled(
        " Press Esc or ? to close ",
        theme.placeholder().add_modifier(Modifier::DIM),
    )]))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

/// Calculate the centered rect for the help overlay.
///
/// Returns a Rect that is centered on the screen with the specified
/// percentage of width and height.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

fn build_help_content(theme: &Theme) -> Vec<Line<'static>> {
    let category_style = Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    let key_style = theme.control(true).add_modifier(Modifier::BOLD);
    let desc_style = Style::default();
    let row = |key, desc| key_value_line(key, desc, KEY_WIDTH, key_style, desc_style);

    vec![
        Line::from(vec![Span::styled("Results", category_style)]),
        row("j / k", "Scroll down / up"),
        row("Ctrl+d / PgDn", "Page down"),
        row("Ctrl+u / PgUp", "Page up"),
        row("g / Home", "Go to top"),
        row("G / End", "Go to bottom"),
        row("Arrows / h l", "Move selection"),
        row("Enter / Space", "Show or hide lyrics"),
        row("Drag thumb", "Scroll with the scrollbar"),
        empty_line(),
        Line::from(vec![Span::styled("Search", category_style)]),
        row("/ / Ctrl+f", "Focus the search input"),
        row("Esc", "Leave the search input"),
        row("Ctrl+l", "Clear the query"),
        row("f", "Open the filter menu"),
        empty_line(),
        Line::from(vec![Span::styled("Application", category_style)]),
        row("q / Ctrl+c", "Quit"),
        row("?", "Toggle this help"),
    ]
}

// ===== Tests =====

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
