//! Results pane state.
//!
//! Owns the visible result list, the selection and lyric toggles, and the
//! scroll container together with the scrollbar synchronizer attached to it.

use crate::view_state::{
    GridGeometry, IndicatorGeometry, ScrollContainer, ScrollPositionSynchronizer,
};
use std::collections::HashSet;
use tracing::debug;

/// Results grid: what is shown, what is selected, and where it is scrolled.
#[derive(Debug)]
pub struct ResultsPane {
    /// Visible results as catalog indices, in display order.
    indices: Vec<usize>,
    /// Selected position within `indices`.
    selected: usize,
    /// Position under the mouse pointer.
    hovered: Option<usize>,
    /// Catalog indices whose lyrics are expanded.
    showing_lyrics: HashSet<usize>,
    container: ScrollContainer,
    scrollbar: ScrollPositionSynchronizer,
}

impl ResultsPane {
    /// Pane showing `indices`, with a scrollbar thumb of at least
    /// `min_thumb_extent` rows.
    pub fn new(indices: Vec<usize>, min_thumb_extent: f64) -> Self {
        let mut container = ScrollContainer::default();
        let scrollbar = ScrollPositionSynchronizer::attach(&mut container, min_thumb_extent);
        Self {
            indices,
            selected: 0,
            hovered: None,
            showing_lyrics: HashSet::new(),
            container,
            scrollbar,
        }
    }

    /// Visible catalog indices in display order.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Number of visible results.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether no results are visible.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Replace the visible results.
    ///
    /// The selection is clamped into the new list and hover is cleared.
    /// Lyric toggles are keyed by catalog index and survive refiltering.
    pub fn set_results(&mut self, indices: Vec<usize>) {
        debug!(count = indices.len(), "Results updated");
        self.indices = indices;
        self.selected = self.selected.min(self.indices.len().saturating_sub(1));
        self.hovered = None;
    }

    /// Selected position, `None` when there are no results.
    pub fn selected(&self) -> Option<usize> {
        (!self.indices.is_empty()).then_some(self.selected)
    }

    /// Catalog index of the selected result.
    pub fn selected_catalog_index(&self) -> Option<usize> {
        self.selected().and_then(|p| self.indices.get(p).copied())
    }

    /// Select `position`, clamped into range.
    pub fn select(&mut self, position: usize) {
        self.selected = position.min(self.indices.len().saturating_sub(1));
    }

    /// Move the selection by `delta` positions, saturating at both ends.
    pub fn move_selection(&mut self, delta: isize) {
        let next = self.selected.saturating_add_signed(delta);
        self.select(next);
    }

    /// Position under the pointer.
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Update the hovered position.
    pub fn set_hovered(&mut self, position: Option<usize>) {
        self.hovered = position.filter(|&p| p < self.indices.len());
    }

    /// Toggle lyrics for the result at `position`. Returns the new state.
    pub fn toggle_lyrics(&mut self, position: usize) -> bool {
        let Some(&index) = self.indices.get(position) else {
            return false;
        };
        if self.showing_lyrics.remove(&index) {
            false
        } else {
            self.showing_lyrics.insert(index);
            true
        }
    }

    /// Whether lyrics are expanded for `catalog_index`.
    pub fn is_showing_lyrics(&self, catalog_index: usize) -> bool {
        self.showing_lyrics.contains(&catalog_index)
    }

    /// The scroll container behind the grid.
    pub fn container(&self) -> &ScrollContainer {
        &self.container
    }

    /// Mutable access to the scroll container.
    pub fn container_mut(&mut self) -> &mut ScrollContainer {
        &mut self.container
    }

    /// The scrollbar synchronizer.
    pub fn scrollbar(&self) -> &ScrollPositionSynchronizer {
        &self.scrollbar
    }

    /// Current indicator geometry, in track rows.
    pub fn indicator(&self) -> IndicatorGeometry {
        self.scrollbar.geometry()
    }

    /// Current scroll offset in rows.
    pub fn scroll_offset(&self) -> f64 {
        self.container.scroll_offset()
    }

    /// Change the thumb's minimum length.
    pub fn set_min_thumb_extent(&mut self, min_extent: f64) {
        self.scrollbar.set_min_extent(min_extent);
    }

    /// Fit the container to `grid` and refresh the indicator.
    pub fn fit_to(&mut self, grid: &GridGeometry) {
        self.container
            .resize(grid.content_extent(self.indices.len()), grid.view_extent());
        self.sync();
    }

    /// Consume pending container changes. Returns whether any were pending.
    pub fn sync(&mut self) -> bool {
        self.scrollbar.sync(&self.container)
    }

    /// Scroll just enough to show the selected card in full.
    pub fn reveal_selected(&mut self, grid: &GridGeometry) {
        if let Some(position) = self.selected() {
            let target = grid.offset_revealing(position, self.container.scroll_offset());
            self.container.set_scroll_offset(target);
        }
    }

    /// Start dragging the thumb at `pointer` (rows from the track's top).
    pub fn begin_drag(&mut self, pointer: f64) {
        let offset = self.container.scroll_offset();
        self.scrollbar.begin_drag(pointer, offset);
    }

    /// Continue a thumb drag. Returns the applied offset, `None` when idle.
    pub fn update_drag(&mut self, pointer: f64) -> Option<f64> {
        self.scrollbar.update_drag(pointer, &mut self.container)
    }

    /// Release the thumb.
    pub fn end_drag(&mut self) {
        self.scrollbar.end_drag();
    }

    /// Pointer capture went away mid-drag.
    pub fn capture_lost(&mut self) {
        self.scrollbar.capture_lost();
    }

    /// Whether the thumb is being dragged.
    pub fn is_dragging(&self) -> bool {
        self.scrollbar.is_dragging()
    }
}
