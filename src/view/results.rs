//! Results pane rendering: the card grid and its scrollbar.
//!
//! Each card is drawn at full height into a scratch buffer and the rows that
//! fall inside the viewport are copied across, so cards cut by the top or
//! bottom edge look the same as when fully visible.

use super::helpers::blit_rows;
use super::scrollbar::Scrollbar;
use super::styles::{CardEmphasis, Theme};
use crate::model::WordBlock;
use crate::state::{highlight_segments, AppState};
use crate::view_state::layout::scroll_rows;
use crate::view_state::ScreenLayout;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
    Frame,
};

/// Render the bordered results pane, its cards and the scrollbar.
pub fn render_results(frame: &mut Frame, layout: &ScreenLayout, state: &AppState, theme: &Theme) {
    let count = state.results.len();
    let title = match count {
        1 => " 1 word ".to_string(),
        n => format!(" {n} words "),
    };
    frame.render_widget(
        Block::default().borders(Borders::ALL).title(title),
        layout.results,
    );

    if count == 0 {
        let empty = Paragraph::new("No words match")
            .style(theme.placeholder())
            .alignment(Alignment::Center);
        frame.render_widget(empty, layout.grid.area);
    } else {
        let rows = scroll_rows(state.results.scroll_offset());
        let selected = state.results.selected();
        let hovered = state.results.hovered();
        let buf = frame.buffer_mut();

        for (position, catalog_index, block) in state.visible_blocks() {
            let Some(placement) = layout.grid.placement(position, rows) else {
                continue;
            };
            let emphasis = if selected == Some(position) {
                CardEmphasis::Selected
            } else if hovered == Some(position) {
                CardEmphasis::Hovered
            } else {
                CardEmphasis::Idle
            };
            let card = Card {
                block,
                show_lyrics: state.results.is_showing_lyrics(catalog_index),
                emphasis,
                theme,
            };

            let mut scratch = Buffer::empty(Rect::new(
                0,
                0,
                placement.rect.width,
                layout.grid.card_height,
            ));
            card.render(scratch.area, &mut scratch);
            blit_rows(&scratch, placement.skip_rows, placement.rect, buf);
        }
    }

    frame.render_widget(
        Scrollbar::new(
            state.results.indicator(),
            state.results.is_dragging(),
            theme,
        ),
        layout.track,
    );
}

/// One word card.
struct Card<'a> {
    block: &'a WordBlock,
    show_lyrics: bool,
    emphasis: CardEmphasis,
    theme: &'a Theme,
}

impl Card<'_> {
    fn details(&self) -> Vec<Line<'static>> {
        let block = self.block;
        vec![
            Line::from(vec![
                Span::styled(block.word, self.theme.card_word()),
                Span::raw(" "),
                Span::styled(
                    format!(" {} ", block.part_of_speech),
                    self.theme.card_tag(),
                ),
            ]),
            Line::from(block.song),
            Line::from(format!("- {}", block.artist)),
        ]
    }

    fn lyric(&self) -> Vec<Line<'static>> {
        let spans: Vec<Span<'static>> = highlight_segments(self.block.lyric, self.block.word)
            .into_iter()
            .map(|segment| {
                if segment.is_match {
                    Span::styled(segment.text, self.theme.lyric_match())
                } else {
                    Span::raw(segment.text)
                }
            })
            .collect();
        vec![Line::from(spans)]
    }
}

impl Widget for Card<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = if self.show_lyrics {
            self.lyric()
        } else {
            self.details()
        };
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL))
            .style(self.theme.card(self.emphasis))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ResolvedConfig;
    use crate::view::styles::ColorConfig;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw(state: &mut AppState, width: u16, height: u16) -> Buffer {
        let area = Rect::new(0, 0, width, height);
        let layout = ScreenLayout::compute(area, state.settings.columns, state.settings.card_height);
        state.results.fit_to(&layout.grid);
        let theme = Theme::new(ColorConfig::fixed(false));
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| render_results(frame, &layout, state, &theme))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn row_text(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .filter_map(|x| buffer.cell((x, y)).map(|c| c.symbol().to_string()))
            .collect()
    }

    fn make_state() -> AppState {
        AppState::new(&ResolvedConfig::default(), "")
    }

    #[test]
    fn first_row_of_cards_shows_words_and_tags() {
        let mut state = make_state();
        let buffer = draw(&mut state, 80, 24);
        let row = row_text(&buffer, 5);
        assert!(row.contains("friend  noun"), "row was {row:?}");
        assert!(row.contains("end  noun"));
        assert!(row.contains("send  verb"));
    }

    #[test]
    fn title_counts_results() {
        let mut state = make_state();
        state.set_filter(crate::model::FilterOption::Adjective);
        let buffer = draw(&mut state, 80, 24);
        assert!(row_text(&buffer, 3).contains(" 2 words "));
    }

    #[test]
    fn toggled_card_shows_lyric() {
        let mut state = make_state();
        state.results.toggle_lyrics(3);
        let buffer = draw(&mut state, 80, 24);
        let text: String = (10..16).map(|y| row_text(&buffer, y)).collect();
        assert!(text.contains("Lean on me"), "text was {text:?}");
    }

    #[test]
    fn scrolled_grid_clips_top_card() {
        let mut state = make_state();
        let area = Rect::new(0, 0, 80, 24);
        let layout = ScreenLayout::compute(area, 3, 6);
        state.results.fit_to(&layout.grid);
        state.results.container_mut().set_scroll_offset(1.0);
        let buffer = draw(&mut state, 80, 24);
        // first card's top border scrolled away; its word row is now the top
        assert!(row_text(&buffer, 4).contains("friend"));
    }

    #[test]
    fn scrollbar_occupies_track_column() {
        let mut state = make_state();
        let buffer = draw(&mut state, 80, 24);
        assert_eq!(buffer.cell((78, 4)).map(|c| c.symbol()), Some("█"));
        assert_eq!(buffer.cell((78, 21)).map(|c| c.symbol()), Some("│"));
    }

    #[test]
    fn empty_results_show_message() {
        let mut state = make_state();
        state.set_filter(crate::model::FilterOption::Noun);
        state.search.insert_char('z');
        state.refilter();
        let buffer = draw(&mut state, 80, 24);
        let text: String = (4..22).map(|y| row_text(&buffer, y)).collect();
        assert!(text.contains("No words match"));
    }
}
