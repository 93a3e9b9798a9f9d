//! Use-Case: Bearbeitungsmodus wechseln.

use super::selection::focus_point;
use crate::app::state::EditMode;
use crate::app::EditorState;
use crate::core::{EditError, PointRef};

/// Setzt den Modus.
///
/// ContinuePath braucht einen fokussierten Endpunkt der primären Collection.
/// Ist nichts fokussiert, wird deren erster Punkt fokussiert, aber erst nach der
/// Prüfung; bei Ablehnung bleibt der Fokus unverändert.
pub fn set_edit_mode(state: &mut EditorState, mode: EditMode) -> Result<(), EditError> {
    if mode == EditMode::ContinuePath {
        match state.selection.focused() {
            Some(_) if state.continue_anchor().is_some() => {}
            Some(_) => return Err(no_anchor()),
            None => {
                let start = state
                    .session
                    .primary
                    .map(|primary| PointRef::new(primary, 0))
                    .filter(|start| is_continue_start(state, *start))
                    .ok_or_else(no_anchor)?;
                focus_point(state, start, false)?;
            }
        }
    }

    if state.session.mode != mode {
        log::info!("Bearbeitungsmodus: {:?} -> {:?}", state.session.mode, mode);
    }
    state.session.mode = mode;
    state.session.reset_mode_data();
    Ok(())
}

fn no_anchor() -> EditError {
    EditError::invalid(
        "ContinuePath",
        "kein fokussierter Endpunkt der primären Collection",
    )
}

/// Ob an `start` weitergezeichnet werden darf (aktiv, Enden erlaubt, Endpunkt).
fn is_continue_start(state: &EditorState, start: PointRef) -> bool {
    state.is_active(start.collection)
        && state.collections.get(start.collection).is_some_and(|c| {
            c.capabilities().can_insert_at_ends && c.is_end_index(start.index)
        })
}

/// Startet ContinuePath an einem Endpunkt; dessen Collection wird primär.
pub fn continue_path_from(
    state: &mut EditorState,
    point: PointRef,
    via_modifier: bool,
) -> Result<(), EditError> {
    if !state.is_active(point.collection) {
        return Err(EditError::UnknownCollection(point.collection));
    }
    let collection = state.collections.try_get(point.collection)?;
    if !collection.capabilities().can_insert_at_ends {
        return Err(EditError::invalid(
            "ContinuePath",
            "Einfügen an den Enden nicht erlaubt",
        ));
    }
    if !collection.is_end_index(point.index) {
        return Err(EditError::invalid("ContinuePath", "Punkt ist kein Endpunkt"));
    }

    state.session.primary = Some(point.collection);
    state.selection.set_focus(&state.collections, Some(point));
    state.session.mode = EditMode::ContinuePath;
    state.session.reset_mode_data();
    state.session.entered_via_modifier = via_modifier;
    log::info!("ContinuePath ab {:?}", point);
    Ok(())
}
