//! View-state layer - scroll geometry, layout, and hit-testing
//!
//! Pure computations shared by the state handlers and the renderer.
//!
//! # Module Structure
//!
//! - `metrics`: ViewportMetrics, IndicatorGeometry and the indicator math
//! - `container`: ScrollContainer - scrollable region with change notifications
//! - `synchronizer`: ScrollPositionSynchronizer - keeps the scrollbar and container in step
//! - `layout`: ScreenLayout and GridGeometry - rectangles for every region
//! - `hit_test`: HitTestResult - result of mouse hit-testing

pub mod container;
pub mod layout;
pub mod metrics;
pub mod synchronizer;

pub use container::{ContainerChange, ScrollContainer, Subscription};
pub use hit_test::HitTestResult;
pub use layout::{thumb_cells, GridGeometry, HitContext, ScreenLayout};
pub use metrics::{IndicatorGeometry, ViewportMetrics, DEFAULT_MIN_INDICATOR_EXTENT};
pub use synchronizer::{DragSession, DragState, ScrollPositionSynchronizer};
