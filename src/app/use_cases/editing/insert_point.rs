//! Use-Case: Punkt einfügen (Doppelklick auf Pfad, ContinuePath).

use crate::app::actions::InsertPointAction;
use crate::app::EditorState;
use crate::core::{EditError, PointRef, TerrainPoint};

/// Fügt `point` an `target` ein (Policy der Collection wird geprüft).
pub fn insert_point(
    state: &mut EditorState,
    target: PointRef,
    point: TerrainPoint,
) -> anyhow::Result<()> {
    state.apply(Box::new(InsertPointAction::new(target, point)))
}

/// Verlängert den Pfad an einem Ende und fokussiert den neuen Endpunkt.
///
/// `target.index` muss `0` (vorne) oder `len` (hinten) sein.
pub fn extend_path(
    state: &mut EditorState,
    target: PointRef,
    point: TerrainPoint,
) -> anyhow::Result<()> {
    let len = state.collections.try_get(target.collection)?.len();
    if target.index != 0 && target.index != len {
        return Err(EditError::invalid("Pfad verlängern", "nur am Anfang oder Ende").into());
    }

    insert_point(state, target, point)?;
    // Neuer Endpunkt wird Anker der nächsten Verlängerung
    state.selection.set_focus(&state.collections, Some(target));
    Ok(())
}
