//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`
/// and only applies while the search input is not focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Scrolling the results pane
    /// Scroll results up by one row. Default: k
    ScrollUp,
    /// Scroll results down by one row. Default: j
    ScrollDown,
    /// Scroll up by one page. Default: Ctrl+u/Page Up
    PageUp,
    /// Scroll down by one page. Default: Ctrl+d/Page Down
    PageDown,
    /// Jump to the first row. Default: g/Home
    ScrollToTop,
    /// Jump to the last row. Default: G/End
    ScrollToBottom,

    // Selection
    /// Select the card to the left. Default: ←/h
    SelectLeft,
    /// Select the card to the right. Default: →/l
    SelectRight,
    /// Select the card above. Default: ↑
    SelectUp,
    /// Select the card below. Default: ↓
    SelectDown,
    /// Flip the selected card between word and lyric view. Default: Enter/Space
    ToggleLyrics,

    // Search and filter
    /// Focus the search input. Default: / or Ctrl+f or Tab
    FocusSearch,
    /// Clear the search query. Default: Ctrl+l
    ClearSearch,
    /// Open or close the filter dropdown. Default: f
    ToggleFilterMenu,

    // Application
    /// Show the help overlay. Default: ?
    Help,
    /// Exit the application. Default: q
    Quit,
}
