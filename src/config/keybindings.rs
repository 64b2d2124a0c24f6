//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::KeyEvent;
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Consulted only while the search input is unfocused; a focused input
/// takes every printable key as text.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        use crossterm::event::{KeyCode, KeyModifiers};

        let mut bindings = HashMap::new();
        let mut bind = |code: KeyCode, modifiers: KeyModifiers, action: KeyAction| {
            bindings.insert(KeyEvent::new(code, modifiers), action);
        };

        // Vim-style scrolling
        bind(KeyCode::Char('j'), KeyModifiers::NONE, KeyAction::ScrollDown);
        bind(KeyCode::Char('k'), KeyModifiers::NONE, KeyAction::ScrollUp);
        bind(KeyCode::Char('g'), KeyModifiers::NONE, KeyAction::ScrollToTop);
        bind(KeyCode::Char('G'), KeyModifiers::SHIFT, KeyAction::ScrollToBottom);
        bind(KeyCode::Home, KeyModifiers::NONE, KeyAction::ScrollToTop);
        bind(KeyCode::End, KeyModifiers::NONE, KeyAction::ScrollToBottom);

        // Page navigation
        bind(KeyCode::Char('d'), KeyModifiers::CONTROL, KeyAction::PageDown);
        bind(KeyCode::Char('u'), KeyModifiers::CONTROL, KeyAction::PageUp);
        bind(KeyCode::PageDown, KeyModifiers::NONE, KeyAction::PageDown);
        bind(KeyCode::PageUp, KeyModifiers::NONE, KeyAction::PageUp);

        // Card selection
        bind(KeyCode::Left, KeyModifiers::NONE, KeyAction::SelectLeft);
        bind(KeyCode::Right, KeyModifiers::NONE, KeyAction::SelectRight);
        bind(KeyCode::Up, KeyModifiers::NONE, KeyAction::SelectUp);
        bind(KeyCode::Down, KeyModifiers::NONE, KeyAction::SelectDown);
        bind(KeyCode::Char('h'), KeyModifiers::NONE, KeyAction::SelectLeft);
        bind(KeyCode::Char('l'), KeyModifiers::NONE, KeyAction::SelectRight);
        bind(KeyCode::Enter, KeyModifiers::NONE, KeyAction::ToggleLyrics);
        bind(KeyCode::Char(' '), KeyModifiers::NONE, KeyAction::ToggleLyrics);

        // Search and filter
        bind(KeyCode::Char('/'), KeyModifiers::NONE, KeyAction::FocusSearch);
        bind(KeyCode::Char('f'), KeyModifiers::CONTROL, KeyAction::FocusSearch);
        bind(KeyCode::Tab, KeyModifiers::NONE, KeyAction::FocusSearch);
        bind(KeyCode::Char('l'), KeyModifiers::CONTROL, KeyAction::ClearSearch);
        bind(KeyCode::Char('f'), KeyModifiers::NONE, KeyAction::ToggleFilterMenu);

        // Application controls
        bind(KeyCode::Char('q'), KeyModifiers::NONE, KeyAction::Quit);
        bind(KeyCode::Char('?'), KeyModifiers::NONE, KeyAction::Help);

        Self { bindings }
    }
}
