//! Filter button and dropdown rendering.

use super::styles::Theme;
use crate::model::FilterOption;
use crate::state::FilterMenu;
use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

/// Render the filter button showing `label`.
pub fn render_filter_button(frame: &mut Frame, area: Rect, label: &str, open: bool, theme: &Theme) {
    let marker = if open { "▴" } else { "▾" };
    let button = Paragraph::new(Line::from(format!("{label} {marker}")))
        .block(Block::default().borders(Borders::ALL).border_style(theme.control(open)));
    frame.render_widget(button, area);
}

/// Render the open dropdown over whatever lies beneath it.
///
/// No-op when the menu is closed.
pub fn render_filter_menu(
    frame: &mut Frame,
    area: Rect,
    menu: FilterMenu,
    current: Option<FilterOption>,
    theme: &Theme,
) {
    let Some(highlighted) = menu.highlighted() else {
        return;
    };

    let items: Vec<ListItem> = FilterOption::MENU
        .iter()
        .map(|&option| {
            ListItem::new(option.label())
                .style(theme.menu_item(option == highlighted, Some(option) == current))
        })
        .collect();

    frame.render_widget(Clear, area);
    frame.render_widget(
        List::new(items).block(Block::default().borders(Borders::ALL).border_style(theme.control(true))),
        area,
    );
}
