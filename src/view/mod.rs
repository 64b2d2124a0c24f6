//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod filter_menu;
mod help;
mod helpers;
mod layout;
mod results;
mod scrollbar;
mod search_input;
mod styles;

pub use help::render_help_overlay;
pub use helpers::{empty_line, key_value_line};
pub use layout::{render_layout, status_text};
pub use scrollbar::Scrollbar;
pub use search_input::SearchBar;
pub use styles::{CardEmphasis, ColorConfig, Theme};

use crate::config::keybindings::KeyBindings;
use crate::config::ResolvedConfig;
use crate::model::{AppError, KeyAction};
use crate::state::{
    handle_filter_menu_key, handle_focus_lost, handle_mouse_event, handle_scroll_action,
    handle_search_key, handle_selection_action, AppState,
};
use crate::view_state::ScreenLayout;
use constants::CARET_BLINK_INTERVAL;
use crossterm::{
    event::{
        self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
        Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    theme: Theme,
    /// Layout of the last drawn frame (for mouse hit-testing)
    last_layout: ScreenLayout,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen, mouse capture and
    /// focus reporting (focus loss ends a scrollbar drag).
    pub fn new(app_state: AppState, theme: Theme) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(EnableMouseCapture)?;
        stdout.execute(EnableFocusChange)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            theme,
            last_layout: ScreenLayout::default(),
        })
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C).
    /// Redraws on input, resize, and caret blink ticks while the search
    /// input is focused.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            if event::poll(CARET_BLINK_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                    }
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    Event::Resize(width, height) => {
                        debug!(width, height, "Terminal resized");
                    }
                    Event::FocusLost => handle_focus_lost(&mut self.app_state),
                    _ => continue,
                }
                self.draw()?;
            } else if self.app_state.toggle_blink() {
                self.draw()?;
            }
        }
    }

    /// Handle a key press. Returns true if the app should quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits, even if not in bindings
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        // Help overlay swallows everything except its own toggles and quit
        if self.app_state.help_visible {
            match key.code {
                KeyCode::Esc | KeyCode::Char('?') => self.app_state.help_visible = false,
                KeyCode::Char('q') => return true,
                _ => {}
            }
            return false;
        }

        if handle_filter_menu_key(&mut self.app_state, key) {
            return false;
        }
        if handle_search_key(&mut self.app_state, key) {
            return false;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };

        match action {
            KeyAction::Quit => return true,
            KeyAction::Help => self.app_state.help_visible = true,
            KeyAction::FocusSearch => self.app_state.focus_search(),
            KeyAction::ClearSearch => {
                if self.app_state.search.clear() {
                    self.app_state.refilter();
                }
            }
            KeyAction::ToggleFilterMenu => {
                self.app_state.menu = self.app_state.menu.toggled(self.app_state.filter);
            }
            KeyAction::ScrollUp
            | KeyAction::ScrollDown
            | KeyAction::PageUp
            | KeyAction::PageDown
            | KeyAction::ScrollToTop
            | KeyAction::ScrollToBottom => {
                let viewport = usize::from(self.last_layout.grid.area.height);
                handle_scroll_action(&mut self.app_state, action, viewport);
            }
            KeyAction::SelectLeft
            | KeyAction::SelectRight
            | KeyAction::SelectUp
            | KeyAction::SelectDown
            | KeyAction::ToggleLyrics => {
                let grid = self.last_layout.grid;
                handle_selection_action(&mut self.app_state, action, &grid);
            }
        }
        false
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        handle_mouse_event(&mut self.app_state, mouse, &self.last_layout);
    }

    /// Render the current frame
    ///
    /// Fits the results container to the new layout and lets the scrollbar
    /// catch up with every change since the last frame before drawing.
    fn draw(&mut self) -> Result<(), TuiError> {
        let size = self.terminal.size()?;
        let area = Rect::new(0, 0, size.width, size.height);
        let settings = self.app_state.settings;
        let layout = ScreenLayout::compute(area, settings.columns, settings.card_height);

        self.app_state.results.fit_to(&layout.grid);
        self.last_layout = layout;

        let state = &self.app_state;
        let theme = &self.theme;
        self.terminal.draw(|frame| {
            render_layout(frame, &layout, state, theme);
        })?;

        Ok(())
    }
}

// ===== Test Helpers =====
//
// The following methods are ONLY for testing within the crate.

#[cfg(test)]
#[allow(dead_code)] // Not all helpers used in every test module
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing without terminal initialization.
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        app_state: AppState,
        key_bindings: KeyBindings,
    ) -> Self {
        Self {
            terminal,
            app_state,
            key_bindings,
            theme: Theme::new(ColorConfig::fixed(false)),
            last_layout: ScreenLayout::default(),
        }
    }

    /// Get reference to app state (test-only accessor)
    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Get mutable reference to app state (test-only accessor)
    pub(crate) fn app_state_mut(&mut self) -> &mut AppState {
        &mut self.app_state
    }

    /// Handle a single keyboard event. Returns true if app should quit.
    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key)
    }

    /// Handle a single mouse event.
    pub(crate) fn handle_mouse_test(&mut self, mouse: MouseEvent) {
        self.handle_mouse(mouse)
    }

    /// Simulate the terminal losing focus.
    pub(crate) fn focus_lost_test(&mut self) {
        handle_focus_lost(&mut self.app_state);
    }

    /// Simulate one caret blink tick. Returns whether a redraw happened.
    pub(crate) fn blink_test(&mut self) -> Result<bool, TuiError> {
        let redraw = self.app_state.toggle_blink();
        if redraw {
            self.draw()?;
        }
        Ok(redraw)
    }

    /// Render a frame.
    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    /// Layout of the last rendered frame.
    pub(crate) fn last_layout(&self) -> &ScreenLayout {
        &self.last_layout
    }

    /// Get reference to terminal.
    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Get mutable reference to terminal (for resizing the test backend).
    pub(crate) fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }
}

/// CLI arguments for TUI initialization
///
/// The subset of command-line arguments that affect the TUI's initial state
/// without being part of the resolved configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    /// Initial search query (`--search`).
    pub initial_query: String,

    /// Disable colors (`--no-color`; `NO_COLOR` is honoured as well).
    pub no_color: bool,
}

impl CliArgs {
    /// Create new CliArgs
    pub fn new(initial_query: impl Into<String>, no_color: bool) -> Self {
        Self {
            initial_query: initial_query.into(),
            no_color,
        }
    }
}

/// Initialize and run the TUI application
///
/// Handles terminal setup, runs the event loop, and ensures cleanup on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_config(config: &ResolvedConfig, args: CliArgs) -> Result<(), TuiError> {
    let app_state = AppState::new(config, &args.initial_query);
    let theme = Theme::new(ColorConfig::from_env_and_args(args.no_color));
    info!(
        results = app_state.results.len(),
        filter = app_state.filter_label(),
        "Starting TUI"
    );

    let mut app = TuiApp::new(app_state, theme)?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture and focus reporting, and leaves the
/// alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(DisableFocusChange)?;
    stdout.execute(DisableMouseCapture)?;
    stdout.execute(LeaveAlternateScreen)?;
    Ok(())
}
