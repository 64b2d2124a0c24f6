//! Internal test modules - whitebox tests with crate access
//!
//! Harness-based acceptance tests that drive a TuiApp<TestBackend> the way a
//! user would and assert on both state and rendered frames.

mod view_snapshots;
