//! Acceptance Test Harness for TUI testing
//!
//! Wraps TuiApp<TestBackend> with methods that simulate what a user does:
//! typing, clicking, dragging the scrollbar, wheeling and resizing.

use crate::config::keybindings::KeyBindings;
use crate::config::ResolvedConfig;
use crate::state::AppState;
use crate::view::TuiApp;
use crate::view_state::ScreenLayout;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

/// Convert a ratatui buffer to a string representation for snapshot testing.
///
/// Empty trailing lines are removed to keep snapshots clean.
fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        lines.push(line.trim_end().to_string());
    }

    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }

    lines.join("\n")
}

/// Test harness for acceptance testing
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    running: bool,
}

#[allow(dead_code)] // Not every helper is used by every acceptance test
impl AcceptanceTestHarness {
    /// Harness over the built-in catalog with an 80x24 terminal.
    pub fn new() -> Self {
        Self::with_config(&ResolvedConfig::default(), "", 80, 24)
    }

    /// Harness with a specific configuration, initial query and terminal size.
    ///
    /// Draws one frame so the layout is known before the first event.
    pub fn with_config(config: &ResolvedConfig, query: &str, width: u16, height: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height))
            .expect("TestBackend terminal creation cannot fail");
        let app_state = AppState::new(config, query);
        let app = TuiApp::new_for_test(terminal, app_state, KeyBindings::default());

        let mut harness = Self { app, running: true };
        harness.redraw();
        harness
    }

    /// Send a single key event and redraw.
    ///
    /// # Returns
    /// * `true` - If app quit as a result of this key
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g., Ctrl+C) and redraw.
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true;
        }

        let quit = self.app.handle_key_test(KeyEvent::new(key, mods));
        if quit {
            self.running = false;
        } else {
            self.redraw();
        }
        quit
    }

    /// Type text one character at a time.
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            if self.send_key(KeyCode::Char(ch)) {
                break;
            }
        }
    }

    /// Left click at a cell.
    pub fn click_at(&mut self, column: u16, row: u16) {
        self.mouse(MouseEventKind::Down(MouseButton::Left), column, row);
        self.mouse(MouseEventKind::Up(MouseButton::Left), column, row);
    }

    /// Press on `from_row` in the scrollbar column, drag through `to_rows`
    /// and release on the last one. A frame is drawn after every step.
    pub fn drag_scrollbar(&mut self, from_row: u16, to_rows: &[u16]) {
        let column = self.layout().track.x;
        self.mouse(MouseEventKind::Down(MouseButton::Left), column, from_row);
        for &row in to_rows {
            self.mouse(MouseEventKind::Drag(MouseButton::Left), column, row);
        }
        let last = to_rows.last().copied().unwrap_or(from_row);
        self.mouse(MouseEventKind::Up(MouseButton::Left), column, last);
    }

    /// Send a raw mouse event and redraw.
    pub fn mouse(&mut self, kind: MouseEventKind, column: u16, row: u16) {
        if !self.running {
            return;
        }
        self.app.handle_mouse_test(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
        self.redraw();
    }

    /// Scroll the wheel by `notches` (positive is down) over a cell.
    pub fn wheel(&mut self, notches: i32, column: u16, row: u16) {
        let kind = if notches >= 0 {
            MouseEventKind::ScrollDown
        } else {
            MouseEventKind::ScrollUp
        };
        for _ in 0..notches.unsigned_abs() {
            self.mouse(kind, column, row);
        }
    }

    /// Terminal focus lost.
    pub fn lose_focus(&mut self) {
        self.app.focus_lost_test();
        self.redraw();
    }

    /// Resize the terminal and redraw.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.app.terminal_mut().backend_mut().resize(width, height);
        self.redraw();
    }

    /// Access app state for assertions.
    pub fn state(&self) -> &AppState {
        self.app.app_state()
    }

    /// Mutable app state, for arranging preconditions.
    pub fn state_mut(&mut self) -> &mut AppState {
        self.app.app_state_mut()
    }

    /// Layout of the last drawn frame.
    pub fn layout(&self) -> ScreenLayout {
        *self.app.last_layout()
    }

    /// Symbol drawn at a cell in the last frame.
    pub fn cell(&self, x: u16, y: u16) -> String {
        self.app
            .terminal()
            .backend()
            .buffer()
            .cell((x, y))
            .map(|c| c.symbol().to_string())
            .unwrap_or_default()
    }

    /// The scrollbar column of the last frame, top to bottom.
    pub fn scrollbar_column(&self) -> String {
        let track = self.layout().track;
        (track.y..track.y + track.height)
            .map(|y| self.cell(track.x, y))
            .collect()
    }

    /// Check if app is still running.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Render the current frame to a string.
    pub fn render_to_string(&mut self) -> String {
        self.redraw();
        buffer_to_string(self.app.terminal().backend().buffer())
    }

    fn redraw(&mut self) {
        self.app
            .render_test()
            .expect("Rendering should succeed in test harness");
    }
}
