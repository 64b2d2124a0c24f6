//! Rendering constants for the TUI.
//!
//! Region sizes live with the layout computation in `view_state::layout`.

use std::time::Duration;

/// Caret blink half-period; also the event poll timeout.
pub const CARET_BLINK_INTERVAL: Duration = Duration::from_millis(500);

/// Scrollbar thumb cell.
pub const THUMB_SYMBOL: &str = "█";

/// Scrollbar track cell.
pub const TRACK_SYMBOL: &str = "│";

/// Text shown in the empty search input.
pub const SEARCH_PLACEHOLDER: &str = "Search for a word…";

/// Width percentage for help overlay popup.
///
/// Percentage of screen width (0-100) for the help overlay modal.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 60;

/// Height percentage for help overlay popup.
///
/// Percentage of screen height (0-100) for the help overlay modal.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;
