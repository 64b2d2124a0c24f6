//! Search input widget for rendering the search bar.

use super::constants::SEARCH_PLACEHOLDER;
use super::styles::Theme;
use crate::state::SearchInput;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

/// Search bar widget.
///
/// Shows the query with a block caret while focused; the caret is hidden
/// on the off phase of the blink. An empty query shows a placeholder.
pub struct SearchBar<'a> {
    input: &'a SearchInput,
    caret_visible: bool,
    theme: &'a Theme,
}

impl<'a> SearchBar<'a> {
    /// Create new SearchBar widget.
    pub fn new(input: &'a SearchInput, caret_visible: bool, theme: &'a Theme) -> Self {
        Self {
            input,
            caret_visible,
            theme,
        }
    }

    fn line(&self, width: usize) -> Line<'a> {
        let show_caret = self.input.is_focused() && self.caret_visible;
        let query = self.input.query();

        if query.is_empty() {
            let mut spans = Vec::new();
            if show_caret {
                spans.push(Span::styled(" ", self.theme.caret()));
            }
            spans.push(Span::styled(SEARCH_PLACEHOLDER, self.theme.placeholder()));
            return Line::from(spans);
        }

        let chars: Vec<char> = query.chars().collect();
        let cursor = self.input.cursor().min(chars.len());
        let start = first_visible_char(&chars, cursor, width);

        let before: String = chars[start..cursor].iter().collect();
        let (at, after): (String, String) = match chars.get(cursor) {
            Some(ch) => (ch.to_string(), chars[cursor + 1..].iter().collect()),
            None => (" ".to_string(), String::new()),
        };

        if show_caret {
            Line::from(vec![
                Span::raw(before),
                Span::styled(at, self.theme.caret()),
                Span::raw(after),
            ])
        } else {
            let rest: String = chars[cursor..].iter().collect();
            Line::from(vec![Span::raw(before), Span::raw(rest)])
        }
    }
}

/// First char index to draw so the cursor cell fits within `width` columns.
fn first_visible_char(chars: &[char], cursor: usize, width: usize) -> usize {
    if width == 0 {
        return cursor;
    }
    // one column is reserved for the caret cell
    let mut used = 1;
    let mut start = cursor;
    while start > 0 {
        let w = chars[start - 1].width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start -= 1;
    }
    start
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .border_style(self.theme.control(self.input.is_focused()));
        let inner_width = usize::from(block.inner(area).width);
        let line = self.line(inner_width);
        Paragraph::new(line).block(block).render(area, buf);
    }
}
