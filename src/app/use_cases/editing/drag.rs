//! Use-Case: Punkt ziehen (Vorschau während des Drags, ein Commit am Ende).

use crate::app::actions::MovePointAction;
use crate::app::state::ActiveGesture;
use crate::app::EditorState;
use crate::core::{EditError, PointRef};
use crate::shared::Viewport;
use glam::Vec2;

/// Startet einen Drag auf `point`. Der aktuelle Wert wird als Startwert gemerkt.
pub fn begin_drag(state: &mut EditorState, point: PointRef, press_screen: Vec2) -> Result<(), EditError> {
    let start_point = state.collections.resolve(point)?;
    state.cancel_gesture();
    state.session.gesture = ActiveGesture::Dragging {
        target: point,
        press_screen,
        start_point,
        current: start_point,
        captured: false,
    };
    Ok(())
}

/// Aktualisiert die Drag-Vorschau.
///
/// Der Greif-Versatz bleibt erhalten: neue Position =
/// `unproject(project(start) + (zeiger - druckpunkt))`. Der Zeiger wird nur
/// übernommen, wenn der Punkt beim ersten Move fokussiert ist.
pub fn update_drag(state: &mut EditorState, viewport: &dyn Viewport, screen_pos: Vec2) -> Result<(), EditError> {
    let ActiveGesture::Dragging {
        target,
        press_screen,
        start_point,
        captured,
        ..
    } = state.session.gesture
    else {
        return Ok(());
    };
    if !captured && state.selection.focused() != Some(target) {
        return Ok(());
    }

    let actual = state.collections.resolve(target)?;
    if actual != start_point {
        log::warn!("Drag abgebrochen: Punkt {:?} wurde zwischenzeitlich verändert", target);
        state.cancel_gesture();
        return Err(EditError::InconsistentState {
            index: target.index,
            expected: start_point,
            actual,
        });
    }

    let moved = viewport.unproject(viewport.project(start_point) + (screen_pos - press_screen));
    state
        .collections
        .try_get_mut(target.collection)?
        .preview_set(target.index, moved)?;
    state.session.gesture = ActiveGesture::Dragging {
        target,
        press_screen,
        start_point,
        current: moved,
        captured: true,
    };
    Ok(())
}

/// Beendet den Drag: Vorschau verwerfen und genau eine Verschiebung committen.
///
/// Endet der Drag am Startwert, entsteht kein History-Eintrag.
pub fn end_drag(state: &mut EditorState) -> anyhow::Result<()> {
    let ActiveGesture::Dragging {
        target,
        start_point,
        current,
        captured,
        ..
    } = state.session.gesture
    else {
        return Ok(());
    };
    state.cancel_gesture();

    if !captured || current == start_point {
        log::debug!("Drag ohne Verschiebung beendet");
        return Ok(());
    }
    state.apply(Box::new(MovePointAction::new(target, start_point, current)))
}
