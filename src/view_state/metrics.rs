//! Scroll geometry: viewport metrics and the indicator (thumb) they imply.
//!
//! Everything here is a pure function of the current metrics. Units are
//! whatever the host measures its container in (terminal rows for the TUI).

/// Default minimum indicator length, in container units.
pub const DEFAULT_MIN_INDICATOR_EXTENT: f64 = 30.0;

/// Snapshot of a scrollable container's geometry.
///
/// Constructed through [`ViewportMetrics::new`], which clamps negative or
/// non-finite inputs to zero and the offset into its valid range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportMetrics {
    content_extent: f64,
    view_extent: f64,
    scroll_offset: f64,
}

impl ViewportMetrics {
    /// Create metrics from raw container measurements.
    pub fn new(content_extent: f64, view_extent: f64, scroll_offset: f64) -> Self {
        let content_extent = non_negative(content_extent);
        let view_extent = non_negative(view_extent);
        let max_offset = (content_extent - view_extent).max(0.0);
        Self {
            content_extent,
            view_extent,
            scroll_offset: non_negative(scroll_offset).min(max_offset),
        }
    }

    /// Total scrollable content length.
    pub fn content_extent(&self) -> f64 {
        self.content_extent
    }

    /// Visible length of the container.
    pub fn view_extent(&self) -> f64 {
        self.view_extent
    }

    /// Current scroll position, always within `[0, max_scroll_offset()]`.
    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    /// Largest valid scroll offset (`content - view`, or 0).
    pub fn max_scroll_offset(&self) -> f64 {
        (self.content_extent - self.view_extent).max(0.0)
    }

    /// Whether the content overflows the view.
    ///
    /// False for empty content, which is treated like content that fits.
    pub fn is_scrollable(&self) -> bool {
        self.content_extent > 0.0 && self.content_extent > self.view_extent
    }

    /// Same extents, different offset (clamped).
    pub fn with_scroll_offset(self, scroll_offset: f64) -> Self {
        Self::new(self.content_extent, self.view_extent, scroll_offset)
    }

    /// Clamp an arbitrary offset into the valid scroll range.
    pub fn clamp_offset(&self, offset: f64) -> f64 {
        if offset.is_nan() {
            return 0.0;
        }
        offset.clamp(0.0, self.max_scroll_offset())
    }
}

impl Default for ViewportMetrics {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

/// Rendered geometry of the indicator within its track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorGeometry {
    /// Length of the thumb.
    pub extent: f64,
    /// Distance of the thumb from the start of the track.
    pub offset: f64,
}

impl IndicatorGeometry {
    /// Thumb that fills a track of the given length.
    pub fn filling(track: f64) -> Self {
        Self {
            extent: non_negative(track),
            offset: 0.0,
        }
    }

    /// End position of the thumb (`offset + extent`).
    pub fn end(&self) -> f64 {
        self.offset + self.extent
    }

    /// Whether `position` (in track coordinates) lies on the thumb.
    pub fn contains(&self, position: f64) -> bool {
        position >= self.offset && position < self.end()
    }
}

/// Thumb length for the given metrics.
///
/// Proportional to the visible fraction, floored at `min_extent` and never
/// longer than the view itself.
pub fn indicator_extent(metrics: &ViewportMetrics, min_extent: f64) -> f64 {
    let view = metrics.view_extent();
    if !metrics.is_scrollable() {
        return view;
    }
    let proportional = view / metrics.content_extent() * view;
    proportional.max(non_negative(min_extent)).min(view)
}

/// Free length of the track the thumb can travel over.
pub fn track_travel(metrics: &ViewportMetrics, indicator_extent: f64) -> f64 {
    (metrics.view_extent() - indicator_extent).max(0.0)
}

/// Recompute the thumb for the current metrics.
///
/// Degenerate containers (empty content, content that fits the view) yield a
/// thumb that fills the track at offset 0.
pub fn recompute_indicator(metrics: &ViewportMetrics, min_extent: f64) -> IndicatorGeometry {
    if !metrics.is_scrollable() {
        return IndicatorGeometry::filling(metrics.view_extent());
    }

    let extent = indicator_extent(metrics, min_extent);
    let offset = scroll_to_indicator_offset(metrics, extent, metrics.scroll_offset());

    IndicatorGeometry { extent, offset }
}

/// Map a scroll offset to a thumb offset.
///
/// `indicator = scroll * travel / max_scroll`, clamped to `[0, travel]`.
pub fn scroll_to_indicator_offset(
    metrics: &ViewportMetrics,
    indicator_extent: f64,
    scroll_offset: f64,
) -> f64 {
    let travel = track_travel(metrics, indicator_extent);
    let max_scroll = metrics.max_scroll_offset();
    if travel <= 0.0 || max_scroll <= 0.0 {
        return 0.0;
    }
    let scroll = metrics.clamp_offset(scroll_offset);
    (scroll * travel / max_scroll).clamp(0.0, travel)
}

/// Map a thumb offset back to a scroll offset.
///
/// Inverse of [`scroll_to_indicator_offset`] over the valid ranges.
pub fn indicator_to_scroll_offset(
    metrics: &ViewportMetrics,
    indicator_extent: f64,
    indicator_offset: f64,
) -> f64 {
    let travel = track_travel(metrics, indicator_extent);
    if travel <= 0.0 {
        return 0.0;
    }
    metrics.clamp_offset(indicator_offset * drag_ratio(metrics, indicator_extent))
}

/// Content units moved per unit of thumb movement.
///
/// `(content - view) / (view - indicator)`, or 0 when the thumb cannot move.
pub fn drag_ratio(metrics: &ViewportMetrics, indicator_extent: f64) -> f64 {
    let travel = track_travel(metrics, indicator_extent);
    if travel <= 0.0 {
        0.0
    } else {
        metrics.max_scroll_offset() / travel
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
