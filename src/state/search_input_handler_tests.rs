//! Tests for search input key handling.

use super::*;
use crate::config::ResolvedConfig;

fn make_state() -> AppState {
    AppState::new(&ResolvedConfig::default(), "")
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_str(state: &mut AppState, text: &str) {
    for ch in text.chars() {
        assert!(handle_search_key(state, key(KeyCode::Char(ch))));
    }
}

#[test]
fn typing_filters_results() {
    let mut state = make_state();
    type_str(&mut state, "str");
    assert_eq!(state.search.query(), "str");
    assert_eq!(state.results.len(), 1);
}

#[test]
fn backspace_widens_results() {
    let mut state = make_state();
    type_str(&mut state, "lean");
    assert_eq!(state.results.len(), 1);
    handle_search_key(&mut state, key(KeyCode::Backspace));
    assert_eq!(state.search.query(), "lea");
    assert_eq!(state.results.len(), 1);
    for _ in 0..3 {
        handle_search_key(&mut state, key(KeyCode::Backspace));
    }
    assert_eq!(state.results.len(), 12);
}

#[test]
fn shifted_characters_are_typed() {
    let mut state = make_state();
    assert!(handle_search_key(
        &mut state,
        KeyEvent::new(KeyCode::Char('E'), KeyModifiers::SHIFT)
    ));
    assert_eq!(state.search.query(), "E");
}

#[test]
fn control_chords_fall_through() {
    let mut state = make_state();
    let consumed = handle_search_key(
        &mut state,
        KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL),
    );
    assert!(!consumed);
    assert_eq!(state.search.query(), "");
}

#[test]
fn navigation_keys_fall_through() {
    let mut state = make_state();
    assert!(!handle_search_key(&mut state, key(KeyCode::Down)));
    assert!(!handle_search_key(&mut state, key(KeyCode::PageDown)));
}

#[test]
fn escape_blurs_input() {
    let mut state = make_state();
    assert!(handle_search_key(&mut state, key(KeyCode::Esc)));
    assert!(!state.search.is_focused());
}

#[test]
fn blurred_input_ignores_keys() {
    let mut state = make_state();
    state.search.blur();
    assert!(!handle_search_key(&mut state, key(KeyCode::Char('q'))));
    assert_eq!(state.search.query(), "");
}

#[test]
fn cursor_keys_move_without_refiltering() {
    let mut state = make_state();
    type_str(&mut state, "ed");
    handle_search_key(&mut state, key(KeyCode::Left));
    type_str(&mut state, "n");
    assert_eq!(state.search.query(), "end");
    handle_search_key(&mut state, key(KeyCode::Home));
    assert_eq!(state.search.cursor(), 0);
    handle_search_key(&mut state, key(KeyCode::End));
    assert_eq!(state.search.cursor(), 3);
}

#[test]
fn typing_resets_caret_blink() {
    let mut state = make_state();
    state.caret_visible = false;
    type_str(&mut state, "a");
    assert!(state.caret_visible);
}
