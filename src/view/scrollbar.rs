//! Custom scrollbar widget.
//!
//! Draws the synchronizer's indicator geometry into a one-column track.

use super::constants::{THUMB_SYMBOL, TRACK_SYMBOL};
use super::styles::Theme;
use crate::view_state::{thumb_cells, IndicatorGeometry};
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

/// Scrollbar for the results pane.
pub struct Scrollbar<'a> {
    indicator: IndicatorGeometry,
    dragging: bool,
    theme: &'a Theme,
}

impl<'a> Scrollbar<'a> {
    /// Scrollbar showing `indicator` (in track rows).
    pub fn new(indicator: IndicatorGeometry, dragging: bool, theme: &'a Theme) -> Self {
        Self {
            indicator,
            dragging,
            theme,
        }
    }
}

impl Widget for Scrollbar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 {
            return;
        }
        let (start, len) = thumb_cells(&self.indicator, area.height);
        let thumb_style = self.theme.thumb(self.dragging);
        let track_style = self.theme.track();

        for row in 0..area.height {
            let (symbol, style) = if row >= start && row < start + len {
                (THUMB_SYMBOL, thumb_style)
            } else {
                (TRACK_SYMBOL, track_style)
            };
            if let Some(cell) = buf.cell_mut((area.x, area.y + row)) {
                cell.set_symbol(symbol).set_style(style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render(indicator: IndicatorGeometry, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(1, height)).unwrap();
        let theme = Theme::default();
        terminal
            .draw(|frame| {
                frame.render_widget(Scrollbar::new(indicator, false, &theme), frame.area());
            })
            .unwrap();
        terminal.backend().to_string()
    }

    #[test]
    fn thumb_at_top() {
        let backend = render(
            IndicatorGeometry {
                extent: 3.0,
                offset: 0.0,
            },
            6,
        );
        assert_snapshot!(backend, @r#"
        "█"
        "█"
        "█"
        "│"
        "│"
        "│"
        "#);
    }

    #[test]
    fn thumb_at_bottom() {
        let backend = render(
            IndicatorGeometry {
                extent: 2.0,
                offset: 4.0,
            },
            6,
        );
        assert_snapshot!(backend, @r#"
        "│"
        "│"
        "│"
        "│"
        "█"
        "█"
        "#);
    }

    #[test]
    fn unscrollable_content_fills_track() {
        let backend = render(IndicatorGeometry::filling(4.0), 4);
        assert_snapshot!(backend, @r#"
        "█"
        "█"
        "█"
        "█"
        "#);
    }

    #[test]
    fn sub_cell_thumb_still_visible() {
        let backend = render(
            IndicatorGeometry {
                extent: 0.3,
                offset: 2.2,
            },
            5,
        );
        assert_snapshot!(backend, @r#"
        "│"
        "│"
        "█"
        "│"
        "│"
        "#);
    }
}
