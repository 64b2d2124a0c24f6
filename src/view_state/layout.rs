//! Screen and results-grid geometry.
//!
//! Pure functions from a terminal area to the rectangles every widget draws
//! into. The same layout is used for rendering and for mouse hit-testing so
//! the two can never disagree.

use super::hit_test::HitTestResult;
use super::metrics::IndicatorGeometry;
use crate::model::FilterOption;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

/// Height of the search bar row, borders included.
pub const SEARCH_BAR_HEIGHT: u16 = 3;

/// Width of the filter dropdown button, borders included.
pub const FILTER_BUTTON_WIDTH: u16 = 14;

/// Convert a container offset (fractional rows) to a whole-row offset.
pub fn scroll_rows(offset: f64) -> u16 {
    if offset.is_finite() && offset > 0.0 {
        offset.round().min(f64::from(u16::MAX)) as u16
    } else {
        0
    }
}

/// Rectangles for every region of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenLayout {
    /// Bordered search input.
    pub search_bar: Rect,
    /// Bordered filter button at the right of the search row.
    pub filter_button: Rect,
    /// Dropdown below the filter button (only drawn while open).
    pub filter_menu: Rect,
    /// Bordered results pane.
    pub results: Rect,
    /// Results grid area (inside the border, left of the track).
    pub grid: GridGeometry,
    /// Scrollbar track column.
    pub track: Rect,
    /// Bottom status line.
    pub status: Rect,
}

impl ScreenLayout {
    /// Lay out `area` for a grid with `columns` columns of `card_height` rows.
    pub fn compute(area: Rect, columns: u16, card_height: u16) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(SEARCH_BAR_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        let top = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(FILTER_BUTTON_WIDTH)])
            .split(rows[0]);

        let search_bar = top[0];
        let filter_button = top[1];

        let menu_height = FilterOption::MENU.len() as u16 + 2;
        let filter_menu = Rect::new(
            filter_button.x,
            filter_button.bottom(),
            filter_button.width,
            menu_height,
        )
        .intersection(area);

        let results = rows[1];
        let inner = inner_of(results);
        let split = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(inner);

        Self {
            search_bar,
            filter_button,
            filter_menu,
            results,
            grid: GridGeometry::new(split[0], columns, card_height),
            track: split[1],
            status: rows[2],
        }
    }

    /// Find what lies under the point (`x`, `y`).
    ///
    /// The open dropdown sits on top of everything else. The indicator is
    /// tested before the rest of the track.
    pub fn hit_test(&self, x: u16, y: u16, ctx: &HitContext) -> HitTestResult {
        let point = Position::new(x, y);

        if ctx.menu_open && self.filter_menu.contains(point) {
            let inner = inner_of(self.filter_menu);
            if inner.contains(point) {
                let index = usize::from(y - inner.y);
                if let Some(option) = FilterOption::MENU.get(index) {
                    return HitTestResult::FilterOption(*option);
                }
            }
            return HitTestResult::FilterMenu;
        }

        if self.filter_button.contains(point) {
            return HitTestResult::FilterButton;
        }
        if self.search_bar.contains(point) {
            return HitTestResult::SearchBar;
        }
        if self.track.contains(point) {
            let (start, len) = thumb_cells(&ctx.indicator, self.track.height);
            let row = y - self.track.y;
            if row >= start && row < start + len {
                return HitTestResult::Thumb;
            }
            return HitTestResult::Track;
        }
        if let Some(position) =
            self.grid
                .position_at(x, y, scroll_rows(ctx.scroll_offset), ctx.result_count)
        {
            return HitTestResult::Card(position);
        }
        if self.results.contains(point) {
            return HitTestResult::Results;
        }
        HitTestResult::Outside
    }
}

/// State needed to hit-test beyond the static layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitContext {
    /// Whether the filter dropdown is open.
    pub menu_open: bool,
    /// Number of visible results.
    pub result_count: usize,
    /// Current container offset.
    pub scroll_offset: f64,
    /// Current indicator geometry in track rows.
    pub indicator: IndicatorGeometry,
}

/// Card grid geometry within the results pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridGeometry {
    /// Screen area the grid is clipped to.
    pub area: Rect,
    /// Number of card columns (at least 1).
    pub columns: u16,
    /// Height of each card in rows (at least 1).
    pub card_height: u16,
}

/// A card's on-screen placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardPlacement {
    /// Clipped screen rectangle.
    pub rect: Rect,
    /// Rows of the card hidden above the grid's top edge.
    pub skip_rows: u16,
}

impl GridGeometry {
    /// Create grid geometry, flooring columns and card height at 1.
    pub fn new(area: Rect, columns: u16, card_height: u16) -> Self {
        Self {
            area,
            columns: columns.max(1),
            card_height: card_height.max(1),
        }
    }

    /// Number of grid rows for `count` results.
    pub fn row_count(&self, count: usize) -> usize {
        count.div_ceil(usize::from(self.columns))
    }

    /// Total content height in rows for `count` results.
    pub fn content_extent(&self, count: usize) -> f64 {
        (self.row_count(count) * usize::from(self.card_height)) as f64
    }

    /// Visible height in rows.
    pub fn view_extent(&self) -> f64 {
        f64::from(self.area.height)
    }

    /// Column x-offset and width; the last column absorbs the remainder.
    fn column_span(&self, column: u16) -> (u16, u16) {
        let width = self.area.width / self.columns;
        let x = self.area.x + column * width;
        let width = if column + 1 == self.columns {
            self.area.right().saturating_sub(x)
        } else {
            width
        };
        (x, width)
    }

    /// Content-space top row of the card at `position`.
    pub fn card_top(&self, position: usize) -> usize {
        (position / usize::from(self.columns)) * usize::from(self.card_height)
    }

    /// Where the card at `position` lands when scrolled by `scroll_rows`.
    ///
    /// `None` when the card is entirely outside the grid area.
    pub fn placement(&self, position: usize, scroll_rows: u16) -> Option<CardPlacement> {
        let column = (position % usize::from(self.columns)) as u16;
        let (x, width) = self.column_span(column);
        if width == 0 || self.area.height == 0 {
            return None;
        }

        let top = self.card_top(position) as i64 - i64::from(scroll_rows);
        let bottom = top + i64::from(self.card_height);
        let view = i64::from(self.area.height);
        if bottom <= 0 || top >= view {
            return None;
        }

        let visible_top = top.max(0);
        let visible_bottom = bottom.min(view);
        Some(CardPlacement {
            rect: Rect::new(
                x,
                self.area.y + visible_top as u16,
                width,
                (visible_bottom - visible_top) as u16,
            ),
            skip_rows: (visible_top - top) as u16,
        })
    }

    /// Result position under (`x`, `y`), if any.
    pub fn position_at(&self, x: u16, y: u16, scroll_rows: u16, count: usize) -> Option<usize> {
        if !self.area.contains(Position::new(x, y)) {
            return None;
        }
        let width = self.area.width / self.columns;
        if width == 0 {
            return None;
        }
        let column = ((x - self.area.x) / width).min(self.columns - 1);
        let content_y = usize::from(y - self.area.y) + usize::from(scroll_rows);
        let row = content_y / usize::from(self.card_height);
        let position = row * usize::from(self.columns) + usize::from(column);
        (position < count).then_some(position)
    }

    /// Smallest offset (in rows) that brings the card at `position` fully
    /// into view from `current`.
    pub fn offset_revealing(&self, position: usize, current: f64) -> f64 {
        let top = self.card_top(position) as f64;
        let bottom = top + f64::from(self.card_height);
        let view = self.view_extent();
        if top < current {
            top
        } else if bottom > current + view {
            bottom - view
        } else {
            current
        }
    }
}

/// Thumb cells in a track of `track_len` rows: `(start_row, length)`.
///
/// The length is rounded and never below one cell, and the thumb always
/// stays inside the track.
pub fn thumb_cells(indicator: &IndicatorGeometry, track_len: u16) -> (u16, u16) {
    if track_len == 0 {
        return (0, 0);
    }
    let len = if indicator.extent.is_finite() {
        indicator.extent.round().clamp(1.0, f64::from(track_len)) as u16
    } else {
        track_len
    };
    let max_start = track_len - len;
    let start = if indicator.offset.is_finite() {
        indicator.offset.round().clamp(0.0, f64::from(max_start)) as u16
    } else {
        0
    };
    (start, len)
}

fn inner_of(area: Rect) -> Rect {
    Rect::new(
        area.x.saturating_add(1),
        area.y.saturating_add(1),
        area.width.saturating_sub(2),
        area.height.saturating_sub(2),
    )
}
