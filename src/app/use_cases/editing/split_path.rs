//! Use-Case: Pfad an einem inneren Punkt teilen.

use crate::app::actions::SplitPathAction;
use crate::app::context_menu::{is_action_enabled, ContextActionId};
use crate::app::EditorState;
use crate::core::{CollectionId, EditError, PointRef};

/// Teilt die Collection von `point` in zwei Hälften.
///
/// Die vordere Hälfte bleibt in der Collection, die hintere wird eine neue
/// Collection mit denselben Capabilities. Ist die Quelle aktives Ziel, wird
/// die neue Collection ebenfalls bearbeitet.
pub fn split_path(state: &mut EditorState, point: PointRef) -> anyhow::Result<CollectionId> {
    if !is_action_enabled(&state.collections, point, ContextActionId::SplitPath) {
        return Err(EditError::invalid("Pfad teilen", "nur an inneren Punkten eines Pfades").into());
    }

    let new_id = state.collections.reserve_id();
    state.apply(Box::new(SplitPathAction::new(
        point.collection,
        point.index,
        new_id,
    )))?;

    if state.is_active(point.collection) && !state.session.derived.contains(&new_id) {
        state.session.derived.push(new_id);
    }
    Ok(new_id)
}
