//! Application state and transitions.
//!
//! AppState is the root state type containing all UI state.

use crate::config::ResolvedConfig;
use crate::model::{catalog, FilterOption, WordBlock};
use crate::state::{filter_blocks, FilterMenu, ResultsPane, SearchInput};

// ===== AppState =====

/// Application state. No terminal access, no I/O.
///
/// # State Machine
///
/// - **Search**: focused (keystrokes edit the query) or blurred (keystrokes
///   are commands). Focused at startup.
/// - **Filter menu**: closed or open with a highlighted option.
/// - **Scrollbar**: idle or dragging, owned by the results pane.
/// - **Help**: overlay shown or hidden.
///
/// Every change to the query or the filter recomputes the visible results
/// through [`AppState::refilter`].
#[derive(Debug)]
pub struct AppState {
    /// Word catalog being searched.
    blocks: &'static [WordBlock],

    /// Search input text, cursor and focus.
    pub search: SearchInput,

    /// Selected part-of-speech filter. `None` shows the "Filter" placeholder
    /// and behaves like "All".
    pub filter: Option<FilterOption>,

    /// Filter dropdown state.
    pub menu: FilterMenu,

    /// Results grid with its scroll container and scrollbar.
    pub results: ResultsPane,

    /// Whether the help overlay is currently visible.
    pub help_visible: bool,

    /// Caret blink phase for the focused search input.
    pub caret_visible: bool,

    /// Grid and scrolling settings.
    pub settings: DisplaySettings,
}

/// Grid and scrolling settings taken from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplaySettings {
    /// Card columns.
    pub columns: u16,
    /// Card height in rows.
    pub card_height: u16,
    /// Minimum thumb length in rows.
    pub min_thumb_extent: u16,
    /// Rows per wheel notch.
    pub wheel_step: u16,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self::from(&ResolvedConfig::default())
    }
}

impl From<&ResolvedConfig> for DisplaySettings {
    fn from(config: &ResolvedConfig) -> Self {
        Self {
            columns: config.columns,
            card_height: config.card_height,
            min_thumb_extent: config.min_thumb_extent,
            wheel_step: config.wheel_step,
        }
    }
}

impl AppState {
    /// Create state over the built-in catalog.
    pub fn new(config: &ResolvedConfig, initial_query: &str) -> Self {
        Self::with_blocks(catalog(), config, initial_query)
    }

    /// Create state over an arbitrary block list.
    pub fn with_blocks(
        blocks: &'static [WordBlock],
        config: &ResolvedConfig,
        initial_query: &str,
    ) -> Self {
        let settings = DisplaySettings::from(config);
        let indices = filter_blocks(blocks, initial_query, config.filter);
        Self {
            blocks,
            search: SearchInput::with_query(initial_query),
            filter: config.filter,
            menu: FilterMenu::Closed,
            results: ResultsPane::new(indices, f64::from(settings.min_thumb_extent)),
            help_visible: false,
            caret_visible: true,
            settings,
        }
    }

    /// The searched catalog.
    pub fn blocks(&self) -> &'static [WordBlock] {
        self.blocks
    }

    /// Visible blocks with their display position and catalog index.
    pub fn visible_blocks(&self) -> impl Iterator<Item = (usize, usize, &'static WordBlock)> + '_ {
        let blocks = self.blocks;
        self.results
            .indices()
            .iter()
            .enumerate()
            .filter_map(move |(position, &index)| {
                blocks.get(index).map(|block| (position, index, block))
            })
    }

    /// Block shown at `position`.
    pub fn block_at(&self, position: usize) -> Option<&'static WordBlock> {
        let index = *self.results.indices().get(position)?;
        self.blocks.get(index)
    }

    /// Recompute visible results from the query and filter.
    pub fn refilter(&mut self) {
        let indices = filter_blocks(self.blocks, self.search.query(), self.filter);
        self.results.set_results(indices);
    }

    /// Choose a filter, close the dropdown and refilter.
    pub fn set_filter(&mut self, option: FilterOption) {
        self.filter = Some(option);
        self.menu = FilterMenu::Closed;
        self.refilter();
    }

    /// Text on the filter button.
    pub fn filter_label(&self) -> &'static str {
        self.filter.map_or("Filter", FilterOption::label)
    }

    /// Flip the caret blink phase. Returns whether a redraw is needed.
    pub fn toggle_blink(&mut self) -> bool {
        self.caret_visible = !self.caret_visible;
        self.search.is_focused()
    }

    /// Focus the search input with the caret shown.
    pub fn focus_search(&mut self) {
        self.search.focus();
        self.caret_visible = true;
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
