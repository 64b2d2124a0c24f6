//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod app_state;
pub mod filter_menu;
pub mod filter_menu_handler;
pub mod highlight;
pub mod mouse_handler;
pub mod results;
pub mod scroll_handler;
pub mod search;
pub mod search_input;
pub mod search_input_handler;
pub mod selection_handler;

// Re-export for convenience
pub use app_state::{AppState, DisplaySettings};
pub use filter_menu::FilterMenu;
pub use filter_menu_handler::handle_filter_menu_key;
pub use highlight::{highlight_segments, LyricSegment};
pub use mouse_handler::{handle_focus_lost, handle_mouse_event, hit_context};
pub use results::ResultsPane;
pub use scroll_handler::{handle_scroll_action, handle_wheel};
pub use search::filter_blocks;
pub use search_input::SearchInput;
pub use search_input_handler::handle_search_key;
pub use selection_handler::handle_selection_action;
