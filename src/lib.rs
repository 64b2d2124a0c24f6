//! Rhymefinder
//!
//! TUI word search over song lyrics, with a custom draggable scrollbar kept
//! in step with the results grid.
//!
//! Follows a Pure Core / Impure Shell architecture:
//! - `model`, `state` and `view_state` are pure and testable without a terminal
//! - `view` owns the terminal, the event loop and rendering
//!
//! The scrollbar core lives in [`view_state::synchronizer`]: a
//! [`view_state::ScrollPositionSynchronizer`] subscribes to a
//! [`view_state::ScrollContainer`], recomputes the indicator whenever the
//! container scrolls or resizes, and turns indicator drags back into scroll
//! offsets.

pub mod config;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;
pub mod view_state;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
