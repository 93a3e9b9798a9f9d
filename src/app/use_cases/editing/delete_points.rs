//! Use-Case: Punkte löschen (Entf-Taste, Kontextmenü).

use crate::app::actions::{PointAction, RemovePointAction, DELETE_POINTS_NAME};
use crate::app::context_menu::{is_action_enabled, ContextActionId};
use crate::app::history::CompositeAction;
use crate::app::EditorState;
use crate::core::{CollectionId, EditError, PointRef};
use indexmap::IndexMap;

/// Löscht alle übergebenen Punkte als einen Undo-Schritt.
///
/// Je Collection wird in absteigender Index-Reihenfolge gelöscht, damit die
/// übrigen Indizes gültig bleiben. Mehrere Löschungen werden zu einer
/// `CompositeAction` zusammengefasst; schlägt eine fehl, wird nichts gelöscht.
pub fn delete_points(state: &mut EditorState, points: &[PointRef]) -> anyhow::Result<()> {
    let mut by_collection: IndexMap<CollectionId, Vec<usize>> = IndexMap::new();
    for point in points {
        by_collection
            .entry(point.collection)
            .or_default()
            .push(point.index);
    }

    let mut actions: Vec<PointAction> = Vec::new();
    for (id, mut indices) in by_collection {
        indices.sort_unstable_by(|a, b| b.cmp(a));
        indices.dedup();
        for index in indices {
            let action = RemovePointAction::capture(&state.collections, PointRef::new(id, index))?;
            actions.push(Box::new(action));
        }
    }

    if actions.len() > 1 {
        let count = actions.len();
        state.apply(Box::new(CompositeAction::new(actions, DELETE_POINTS_NAME)))?;
        log::info!("{} Punkte gelöscht", count);
        return Ok(());
    }
    match actions.pop() {
        Some(action) => state.apply(action),
        None => {
            log::debug!("Nichts zum Löschen selektiert");
            Ok(())
        }
    }
}

/// Löscht einen einzelnen Punkt über das Kontextmenü.
pub fn delete_point(state: &mut EditorState, point: PointRef) -> anyhow::Result<()> {
    if !is_action_enabled(&state.collections, point, ContextActionId::DeletePoint) {
        return Err(EditError::invalid("Punkt löschen", "für diese Collection nicht erlaubt").into());
    }
    delete_points(state, &[point])
}
