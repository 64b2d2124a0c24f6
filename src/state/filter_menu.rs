//! Filter dropdown state machine.
//!
//! Closed, or open with one option highlighted for keyboard navigation.

use crate::model::FilterOption;

/// Dropdown state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMenu {
    /// Dropdown hidden.
    #[default]
    Closed,
    /// Dropdown shown.
    Open {
        /// Index into [`FilterOption::MENU`].
        highlighted: usize,
    },
}

impl FilterMenu {
    /// Whether the dropdown is shown.
    pub fn is_open(&self) -> bool {
        matches!(self, FilterMenu::Open { .. })
    }

    /// Open with the current selection highlighted (first option if none).
    pub fn open(selected: Option<FilterOption>) -> Self {
        FilterMenu::Open {
            highlighted: selected.map_or(0, FilterOption::menu_index),
        }
    }

    /// Toggle between open and closed.
    pub fn toggled(self, selected: Option<FilterOption>) -> Self {
        match self {
            FilterMenu::Closed => Self::open(selected),
            FilterMenu::Open { .. } => FilterMenu::Closed,
        }
    }

    /// Move the highlight by `delta`, wrapping around. No-op when closed.
    pub fn moved(self, delta: isize) -> Self {
        match self {
            FilterMenu::Open { highlighted } => {
                let len = FilterOption::MENU.len() as isize;
                let next = (highlighted as isize + delta).rem_euclid(len) as usize;
                FilterMenu::Open { highlighted: next }
            }
            FilterMenu::Closed => FilterMenu::Closed,
        }
    }

    /// Highlighted option, if open.
    pub fn highlighted(&self) -> Option<FilterOption> {
        match self {
            FilterMenu::Open { highlighted } => FilterOption::MENU.get(*highlighted).copied(),
            FilterMenu::Closed => None,
        }
    }
}
