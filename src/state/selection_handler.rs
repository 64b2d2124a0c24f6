//! Card selection keyboard action handler.

use crate::model::KeyAction;
use crate::state::AppState;
use crate::view_state::GridGeometry;

/// Handle a selection keyboard action on the results grid.
///
/// Arrow-style actions move the selection within the grid (up/down move by
/// a whole row) and then scroll just enough to show the selected card.
/// `ToggleLyrics` flips the lyric panel of the selected card. Other actions
/// leave the state unchanged.
pub fn handle_selection_action(state: &mut AppState, action: KeyAction, grid: &GridGeometry) {
    let columns = isize::try_from(grid.columns).unwrap_or(1);

    let delta = match action {
        KeyAction::SelectLeft => -1,
        KeyAction::SelectRight => 1,
        KeyAction::SelectUp => -columns,
        KeyAction::SelectDown => columns,
        KeyAction::ToggleLyrics => {
            if let Some(position) = state.results.selected() {
                state.results.toggle_lyrics(position);
            }
            return;
        }
        _ => return,
    };

    state.results.move_selection(delta);
    state.results.reveal_selected(grid);
}
