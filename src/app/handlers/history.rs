//! Handler für Undo/Redo-Operationen.

use crate::app::state::EditMode;
use crate::app::EditorState;
use crate::core::PointRef;

/// Führt einen Undo-Schritt aus, falls vorhanden.
pub fn undo(state: &mut EditorState) -> anyhow::Result<()> {
    let continue_at_start = continue_end(state);
    state.cancel_gesture();
    if state.history.undo(&mut state.collections)? {
        log::info!("Undo ausgeführt");
        restore_after_step(state, continue_at_start);
    } else {
        log::debug!("Undo: nichts zu tun");
    }
    Ok(())
}

/// Führt einen Redo-Schritt aus, falls vorhanden.
pub fn redo(state: &mut EditorState) -> anyhow::Result<()> {
    let continue_at_start = continue_end(state);
    state.cancel_gesture();
    if state.history.redo(&mut state.collections)? {
        log::info!("Redo ausgeführt");
        restore_after_step(state, continue_at_start);
    } else {
        log::debug!("Redo: nichts zu tun");
    }
    Ok(())
}

/// `Some(true)` wenn ContinuePath am Anfang des Pfades verlängert.
fn continue_end(state: &EditorState) -> Option<bool> {
    if state.session.mode != EditMode::ContinuePath {
        return None;
    }
    state.continue_anchor().map(|anchor| anchor.index == 0)
}

/// Revalidiert die Selektion; ContinuePath setzt am selben Ende fort oder endet.
fn restore_after_step(state: &mut EditorState, continue_at_start: Option<bool>) {
    state.selection.revalidate(&state.collections);
    if state.session.mode != EditMode::ContinuePath {
        return;
    }

    if let (Some(at_start), Some(primary)) = (continue_at_start, state.session.primary) {
        let len = state.collections.get(primary).map_or(0, |c| c.len());
        if len > 0 {
            let index = if at_start { 0 } else { len - 1 };
            state
                .selection
                .set_focus(&state.collections, Some(PointRef::new(primary, index)));
        }
    }
    if state.continue_anchor().is_none() {
        log::debug!("ContinuePath nach Undo/Redo ohne Endpunkt beendet");
        state.session.mode = EditMode::None;
        state.session.reset_mode_data();
    }
}
