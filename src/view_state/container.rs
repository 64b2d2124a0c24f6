//! Host-side scroll container with explicit change subscriptions.
//!
//! The container owns the authoritative scroll offset. Anything that needs to
//! follow it (the scrollbar) subscribes and receives [`ContainerChange`]
//! notifications through a channel. Dropping the [`Subscription`] is the
//! unsubscribe: the next notification prunes the dead sender.

use super::metrics::ViewportMetrics;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use tracing::trace;

/// Notification published by a [`ScrollContainer`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContainerChange {
    /// Scroll offset changed (after clamping).
    Scrolled {
        /// The new offset.
        offset: f64,
    },
    /// Content or view extent changed.
    Resized(ViewportMetrics),
}

/// Receiving half of a container subscription.
///
/// Released on drop; [`Subscription::unsubscribe`] makes that explicit.
#[derive(Debug)]
pub struct Subscription {
    rx: Receiver<ContainerChange>,
}

impl Subscription {
    /// Take every pending notification, oldest first.
    pub fn drain(&self) -> Vec<ContainerChange> {
        let mut changes = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(change) => changes.push(change),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        changes
    }

    /// Stop receiving notifications.
    pub fn unsubscribe(self) {}
}

/// A scrollable region: content extent, view extent and scroll offset.
#[derive(Debug, Default)]
pub struct ScrollContainer {
    metrics: ViewportMetrics,
    subscribers: Vec<Sender<ContainerChange>>,
}

impl ScrollContainer {
    /// Create a container scrolled to the top.
    pub fn new(content_extent: f64, view_extent: f64) -> Self {
        Self {
            metrics: ViewportMetrics::new(content_extent, view_extent, 0.0),
            subscribers: Vec::new(),
        }
    }

    /// Current geometry.
    pub fn metrics(&self) -> ViewportMetrics {
        self.metrics
    }

    /// Current scroll offset.
    pub fn scroll_offset(&self) -> f64 {
        self.metrics.scroll_offset()
    }

    /// Register for change notifications.
    pub fn subscribe(&mut self) -> Subscription {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        Subscription { rx }
    }

    /// Number of registered subscribers.
    ///
    /// Subscriptions dropped since the last notification are still counted
    /// until that notification prunes them.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Set the scroll offset, clamped to the valid range.
    ///
    /// Returns the applied offset. Subscribers are notified only when the
    /// offset actually changed.
    pub fn set_scroll_offset(&mut self, offset: f64) -> f64 {
        let previous = self.metrics.scroll_offset();
        self.metrics = self.metrics.with_scroll_offset(offset);
        let applied = self.metrics.scroll_offset();
        if applied != previous {
            self.notify(ContainerChange::Scrolled { offset: applied });
        }
        applied
    }

    /// Scroll relative to the current offset.
    pub fn scroll_by(&mut self, delta: f64) -> f64 {
        self.set_scroll_offset(self.metrics.scroll_offset() + delta)
    }

    /// Scroll to the very top.
    pub fn scroll_to_top(&mut self) -> f64 {
        self.set_scroll_offset(0.0)
    }

    /// Scroll to the very bottom.
    pub fn scroll_to_bottom(&mut self) -> f64 {
        self.set_scroll_offset(self.metrics.max_scroll_offset())
    }

    /// Change the extents, keeping the offset where it is if still valid.
    pub fn resize(&mut self, content_extent: f64, view_extent: f64) {
        let resized =
            ViewportMetrics::new(content_extent, view_extent, self.metrics.scroll_offset());
        if resized != self.metrics {
            self.metrics = resized;
            self.notify(ContainerChange::Resized(resized));
        }
    }

    /// Notify subscribers and prune the ones that went away.
    ///
    /// Always goes through the subscription channel; the container never calls
    /// back into its subscribers.
    fn notify(&mut self, change: ContainerChange) {
        let before = self.subscribers.len();
        self.subscribers.retain(|tx| tx.send(change).is_ok());
        let pruned = before - self.subscribers.len();
        if pruned > 0 {
            trace!(pruned, "Dropped stale scroll subscriptions");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_scroll_offset_clamps_and_notifies() {
        let mut container = ScrollContainer::new(100.0, 40.0);
        let sub = container.subscribe();

        assert_eq!(container.set_scroll_offset(500.0), 60.0);
        assert_eq!(sub.drain(), vec![ContainerChange::Scrolled { offset: 60.0 }]);
    }

    #[test]
    fn unchanged_offset_does_not_notify() {
        let mut container = ScrollContainer::new(100.0, 40.0);
        let sub = container.subscribe();

        container.set_scroll_offset(0.0);
        container.set_scroll_offset(-5.0);
        assert!(sub.drain().is_empty());
    }

    #[test]
    fn resize_reclamps_offset() {
        let mut container = ScrollContainer::new(100.0, 40.0);
        container.scroll_to_bottom();
        let sub = container.subscribe();

        container.resize(50.0, 40.0);
        assert_eq!(container.scroll_offset(), 10.0);
        assert_eq!(
            sub.drain(),
            vec![ContainerChange::Resized(ViewportMetrics::new(50.0, 40.0, 10.0))]
        );
    }

    #[test]
    fn dropped_subscription_is_pruned_on_next_change() {
        let mut container = ScrollContainer::new(100.0, 40.0);
        let kept = container.subscribe();
        let dropped = container.subscribe();
        assert_eq!(container.subscriber_count(), 2);

        dropped.unsubscribe();
        container.scroll_by(10.0);

        assert_eq!(container.subscriber_count(), 1);
        assert_eq!(kept.drain().len(), 1);
    }

    #[test]
    fn drain_preserves_order() {
        let mut container = ScrollContainer::new(100.0, 40.0);
        let sub = container.subscribe();

        container.scroll_by(5.0);
        container.scroll_by(5.0);
        container.scroll_to_top();

        let offsets: Vec<f64> = sub
            .drain()
            .into_iter()
            .map(|change| match change {
                ContainerChange::Scrolled { offset } => offset,
                ContainerChange::Resized(m) => m.scroll_offset(),
            })
            .collect();
        assert_eq!(offsets, vec![5.0, 10.0, 0.0]);
    }
}
