//! Gemeinsame Selektions-Hilfsfunktionen.

use crate::app::EditorState;
use crate::core::{EditError, PointRef};

/// Fokussiert einen Punkt einer aktiven Collection, optional mit Selektion.
///
/// Ein Punkt wird dabei nur hinzugefügt, bestehende Selektion bleibt erhalten.
pub fn focus_point(state: &mut EditorState, point: PointRef, select: bool) -> Result<(), EditError> {
    if !state.is_active(point.collection) {
        return Err(EditError::UnknownCollection(point.collection));
    }
    state.collections.resolve(point)?;
    state.selection.set_focus(&state.collections, Some(point));
    if select {
        state.selection.select(&state.collections, point);
    }
    Ok(())
}

/// Hebt die Punkt-Selektion auf.
pub fn clear_selection(state: &mut EditorState) {
    state.selection.clear();
}

/// Selektiert alle Punkte aller aktiven Ziele.
pub fn select_all(state: &mut EditorState) {
    for id in state.active_targets() {
        let len = state.collections.get(id).map_or(0, |c| c.len());
        for index in 0..len {
            state
                .selection
                .select(&state.collections, PointRef::new(id, index));
        }
    }
}

/// Fokussiert den ersten selektierten Punkt (nach Rechteck-Selektion).
pub fn focus_first_selected(state: &mut EditorState) {
    let first = state.selection.selected().next();
    if first.is_some() {
        state.selection.set_focus(&state.collections, first);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EditablePointCollection, PointCollectionCapabilities, TerrainPoint};

    #[test]
    fn focus_outside_active_targets_is_rejected() {
        let mut state = EditorState::new();
        let inactive = state.collections.add(EditablePointCollection::new(
            vec![TerrainPoint::new(0.0, 0.0)],
            PointCollectionCapabilities::path(),
        ));
        let result = focus_point(&mut state, PointRef::new(inactive, 0), true);
        assert_eq!(result, Err(EditError::UnknownCollection(inactive)));
        assert_eq!(state.selection.focused(), None);
    }

    #[test]
    fn select_all_covers_every_target() {
        let mut state = EditorState::new();
        let caps = PointCollectionCapabilities::path();
        let a = state.collections.add(EditablePointCollection::new(
            vec![TerrainPoint::new(0.0, 0.0), TerrainPoint::new(1.0, 0.0)],
            caps,
        ));
        let b = state.collections.add(EditablePointCollection::new(
            vec![TerrainPoint::new(5.0, 5.0)],
            caps,
        ));
        state.set_multi_edit_points(vec![a, b]);

        select_all(&mut state);
        assert_eq!(state.selection.len(), 3);

        focus_first_selected(&mut state);
        assert_eq!(state.selection.focused(), Some(PointRef::new(a, 0)));
    }
}
