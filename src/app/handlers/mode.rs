//! Handler für Moduswechsel und Gesten-Abbruch.

use crate::app::state::EditMode;
use crate::app::use_cases;
use crate::app::EditorState;
use crate::core::{PointRef, TerrainPoint};

pub fn set_edit_mode(state: &mut EditorState, mode: EditMode) -> anyhow::Result<()> {
    use_cases::mode::set_edit_mode(state, mode)?;
    Ok(())
}

pub fn continue_path_from(state: &mut EditorState, point: PointRef, via_modifier: bool) -> anyhow::Result<()> {
    use_cases::mode::continue_path_from(state, point, via_modifier)?;
    Ok(())
}

/// Merkt die Zeigerposition für das ContinuePath-Vorschau-Segment.
pub fn update_cursor(state: &mut EditorState, point: TerrainPoint) {
    if state.session.mode == EditMode::ContinuePath {
        state.session.cursor = Some(point);
    }
}

/// Bricht die laufende Geste ab (Escape).
pub fn cancel_gesture(state: &mut EditorState) {
    if !state.session.gesture.is_none() {
        log::debug!("Geste abgebrochen: {:?}", state.session.gesture);
    }
    state.cancel_gesture();
}
