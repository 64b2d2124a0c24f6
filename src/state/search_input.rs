//! Search input handling (pure state transitions).
//!
//! The cursor is a character index, so multi-byte input edits cleanly.

/// Editable single-line query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchInput {
    query: String,
    cursor: usize,
    focused: bool,
}

impl SearchInput {
    /// Focused input holding `query`, cursor at the end.
    pub fn with_query(query: impl Into<String>) -> Self {
        let query = query.into();
        let cursor = query.chars().count();
        Self {
            query,
            cursor,
            focused: true,
        }
    }

    /// Current query text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether keystrokes go to the input.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Give the input keyboard focus.
    pub fn focus(&mut self) {
        self.focused = true;
    }

    /// Take keyboard focus away.
    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Insert `ch` at the cursor and advance.
    pub fn insert_char(&mut self, ch: char) {
        let at = self.byte_offset(self.cursor);
        self.query.insert(at, ch);
        self.cursor += 1;
    }

    /// Delete the character before the cursor. Returns whether text changed.
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let at = self.byte_offset(self.cursor - 1);
        self.query.remove(at);
        self.cursor -= 1;
        true
    }

    /// Delete the character under the cursor. Returns whether text changed.
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.len() {
            return false;
        }
        let at = self.byte_offset(self.cursor);
        self.query.remove(at);
        true
    }

    /// Move cursor left, saturating at 0.
    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move cursor right, saturating at the end.
    pub fn cursor_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.len());
    }

    /// Move cursor to the start.
    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to the end.
    pub fn cursor_end(&mut self) {
        self.cursor = self.len();
    }

    /// Empty the query. Returns whether text changed.
    pub fn clear(&mut self) -> bool {
        let changed = !self.query.is_empty();
        self.query.clear();
        self.cursor = 0;
        changed
    }

    fn len(&self) -> usize {
        self.query.chars().count()
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.query
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.query.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty_and_unfocused() {
        let input = SearchInput::default();
        assert_eq!(input.query(), "");
        assert_eq!(input.cursor(), 0);
        assert!(!input.is_focused());
    }

    #[test]
    fn with_query_places_cursor_at_end() {
        let input = SearchInput::with_query("héllo");
        assert_eq!(input.cursor(), 5);
        assert!(input.is_focused());
    }

    #[test]
    fn insert_at_cursor() {
        let mut input = SearchInput::with_query("frnd");
        input.cursor_left();
        input.cursor_left();
        input.insert_char('i');
        input.insert_char('e');
        assert_eq!(input.query(), "friend");
        assert_eq!(input.cursor(), 4);
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let mut input = SearchInput::with_query("abc");
        input.cursor_home();
        assert!(!input.backspace());
        assert_eq!(input.query(), "abc");
    }

    #[test]
    fn backspace_handles_multibyte() {
        let mut input = SearchInput::with_query("naïve");
        input.cursor_left();
        input.cursor_left();
        assert!(input.backspace());
        assert_eq!(input.query(), "nave");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn delete_removes_under_cursor() {
        let mut input = SearchInput::with_query("send");
        input.cursor_home();
        assert!(input.delete());
        assert_eq!(input.query(), "end");
        input.cursor_end();
        assert!(!input.delete());
    }

    #[test]
    fn cursor_right_saturates() {
        let mut input = SearchInput::with_query("ab");
        input.cursor_right();
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn clear_reports_change() {
        let mut input = SearchInput::with_query("x");
        assert!(input.clear());
        assert!(!input.clear());
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn focus_and_blur() {
        let mut input = SearchInput::default();
        input.focus();
        assert!(input.is_focused());
        input.blur();
        assert!(!input.is_focused());
    }
}
