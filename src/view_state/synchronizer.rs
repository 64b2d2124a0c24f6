//! Scroll position synchronizer for the custom scrollbar.
//!
//! Keeps the indicator geometry consistent with a [`ScrollContainer`] and
//! turns pointer drags on the indicator into scroll offsets.
//!
//! # Data flow
//!
//! ```text
//! container ──Scrolled/Resized──▶ sync() ──▶ recompute_indicator()
//!     ▲                                              │
//!     └──── set_scroll_offset() ◀── update_drag() ◀──┘ (pointer moves)
//! ```
//!
//! The loop is broken per tick: notifications are queued on the subscription
//! and only consumed by the next [`ScrollPositionSynchronizer::sync`], so a
//! drag update never re-enters itself.

use super::container::{ContainerChange, ScrollContainer, Subscription};
use super::metrics::{self, IndicatorGeometry, ViewportMetrics};
use tracing::{debug, trace};

/// A pointer drag in progress.
///
/// The start offset is frozen for the whole drag so repeated moves do not
/// accumulate rounding drift.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Pointer coordinate (track axis) at pointer-down.
    pub pointer_start: f64,
    /// Container scroll offset at pointer-down.
    pub scroll_start: f64,
}

/// Drag state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// No drag; pointer moves are ignored.
    #[default]
    Idle,
    /// Pointer captured by the indicator.
    Dragging(DragSession),
}

/// Synchronizes a scrollbar indicator with a scroll container.
#[derive(Debug)]
pub struct ScrollPositionSynchronizer {
    min_extent: f64,
    metrics: ViewportMetrics,
    geometry: IndicatorGeometry,
    state: DragState,
    last_applied: Option<f64>,
    subscription: Subscription,
}

impl ScrollPositionSynchronizer {
    /// Subscribe to `container` and compute the initial indicator.
    pub fn attach(container: &mut ScrollContainer, min_extent: f64) -> Self {
        let subscription = container.subscribe();
        let metrics = container.metrics();
        Self {
            min_extent,
            metrics,
            geometry: metrics::recompute_indicator(&metrics, min_extent),
            state: DragState::Idle,
            last_applied: None,
            subscription,
        }
    }

    /// Release the container subscription.
    pub fn detach(self) {
        self.subscription.unsubscribe();
    }

    /// Current indicator geometry.
    pub fn geometry(&self) -> IndicatorGeometry {
        self.geometry
    }

    /// Metrics the current geometry was computed from.
    pub fn metrics(&self) -> ViewportMetrics {
        self.metrics
    }

    /// Current drag state.
    pub fn state(&self) -> DragState {
        self.state
    }

    /// Whether a drag session is active.
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// Minimum indicator extent in use.
    pub fn min_extent(&self) -> f64 {
        self.min_extent
    }

    /// Change the minimum indicator extent and recompute.
    pub fn set_min_extent(&mut self, min_extent: f64) {
        self.min_extent = min_extent;
        self.recompute_indicator(self.metrics);
    }

    /// Recompute the indicator from explicit metrics.
    pub fn recompute_indicator(&mut self, metrics: ViewportMetrics) -> IndicatorGeometry {
        self.metrics = metrics;
        self.geometry = metrics::recompute_indicator(&metrics, self.min_extent);
        self.geometry
    }

    /// Consume pending container notifications.
    ///
    /// Any number of queued notifications collapses into at most one
    /// recompute from the container's authoritative metrics. When every
    /// notification echoes an offset this synchronizer applied itself and the
    /// geometry already matches the container, the recompute is skipped.
    /// Returns `true` if any notifications were pending.
    pub fn sync(&mut self, container: &ScrollContainer) -> bool {
        let changes = self.subscription.drain();
        if changes.is_empty() {
            return false;
        }

        let mut echoes_only = true;
        for change in &changes {
            match change {
                ContainerChange::Scrolled { offset } if Some(*offset) == self.last_applied => {
                    trace!(offset, "Scroll notification echoes drag update");
                }
                ContainerChange::Scrolled { offset } => {
                    trace!(offset, "External scroll");
                    echoes_only = false;
                }
                ContainerChange::Resized(metrics) => {
                    debug!(
                        content = metrics.content_extent(),
                        view = metrics.view_extent(),
                        "Container resized"
                    );
                    echoes_only = false;
                }
            }
        }
        self.last_applied = None;

        let current = container.metrics();
        if echoes_only && current == self.metrics {
            trace!("Indicator already reflects drag updates");
        } else {
            self.recompute_indicator(current);
        }
        true
    }

    /// Start a drag at `pointer`, remembering the offset at this instant.
    ///
    /// Restarts the session if one is already active.
    pub fn begin_drag(&mut self, pointer: f64, current_scroll_offset: f64) {
        // Range clamping happens per move against the latest extents
        let scroll_start = if current_scroll_offset.is_nan() {
            0.0
        } else {
            current_scroll_offset
        };
        let session = DragSession {
            pointer_start: pointer,
            scroll_start,
        };
        debug!(
            pointer = session.pointer_start,
            scroll = session.scroll_start,
            "Scrollbar drag started"
        );
        self.state = DragState::Dragging(session);
        self.last_applied = None;
    }

    /// Offset a drag to `pointer` would produce, without applying it.
    ///
    /// Uses the latest extents; only the session's start offset is frozen.
    /// `None` when idle.
    pub fn drag_target(&self, pointer: f64, metrics: &ViewportMetrics) -> Option<f64> {
        let DragState::Dragging(session) = self.state else {
            return None;
        };

        let extent = metrics::indicator_extent(metrics, self.min_extent);
        let ratio = metrics::drag_ratio(metrics, extent);
        let delta = pointer - session.pointer_start;
        Some(metrics.clamp_offset(session.scroll_start + delta * ratio))
    }

    /// Move the drag to `pointer` and scroll the container accordingly.
    ///
    /// Returns the container's new offset, or `None` when idle. The indicator
    /// is recomputed right away; the container only notifies when its offset
    /// actually changed.
    pub fn update_drag(&mut self, pointer: f64, container: &mut ScrollContainer) -> Option<f64> {
        let target = self.drag_target(pointer, &container.metrics())?;

        let applied = container.set_scroll_offset(target);
        trace!(pointer, applied, "Scrollbar drag update");
        self.last_applied = Some(applied);
        self.recompute_indicator(container.metrics());
        Some(applied)
    }

    /// End the drag, committing whatever offset was last applied.
    ///
    /// No-op when idle.
    pub fn end_drag(&mut self) {
        if let DragState::Dragging(session) = self.state {
            debug!(
                scroll_start = session.scroll_start,
                last_applied = ?self.last_applied,
                "Scrollbar drag ended"
            );
            self.state = DragState::Idle;
        }
    }

    /// Pointer capture was lost (e.g. terminal focus left); ends the drag.
    pub fn capture_lost(&mut self) {
        self.end_drag();
    }
}

#[cfg(test)]
#[path = "synchronizer_tests.rs"]
mod tests;
