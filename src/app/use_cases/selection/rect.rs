//! Use-Case: Rechteck-Selektion (Drag auf freier Fläche).

use crate::app::EditorState;
use crate::core::PointRef;
use crate::shared::{ScreenRect, Viewport};

/// Selektiert alle Punkte der aktiven Ziele, deren Screen-Position im Rechteck
/// liegt (inkl. Rand). Ohne `additive` werden Punkte außerhalb abgewählt.
pub fn select_points_in_rect(
    state: &mut EditorState,
    viewport: &dyn Viewport,
    rect: ScreenRect,
    additive: bool,
) {
    for id in state.active_targets() {
        let Some(collection) = state.collections.get(id) else {
            continue;
        };
        for (index, point) in collection.points().iter().enumerate() {
            let point_ref = PointRef::new(id, index);
            if rect.contains(viewport.project(*point)) {
                state.selection.select(&state.collections, point_ref);
            } else if !additive {
                state.selection.deselect(point_ref);
            }
        }
    }
}
