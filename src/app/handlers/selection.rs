//! Handler für Selektion, Rechteck-Selektion und Kontextmenüs.

use crate::app::context_menu::available_actions;
use crate::app::state::ActiveGesture;
use crate::app::use_cases;
use crate::app::{EditorHost, EditorState};
use crate::core::PointRef;
use crate::shared::{ScreenRect, Viewport};
use glam::Vec2;

/// Fokussiert einen Punkt (Linksklick zusätzlich mit Selektion).
pub fn focus_point(state: &mut EditorState, point: PointRef, select: bool) -> anyhow::Result<()> {
    use_cases::selection::focus_point(state, point, select)?;
    Ok(())
}

/// Hebt nur die Punkt-Selektion auf.
pub fn clear(state: &mut EditorState) {
    use_cases::selection::clear_selection(state);
}

/// Hebt Punkt- und Host-Selektion auf (Klick ins Leere).
pub fn clear_all(state: &mut EditorState, host: &mut dyn EditorHost) {
    use_cases::selection::clear_selection(state);
    host.clear_selection();
}

pub fn select_all(state: &mut EditorState) {
    use_cases::selection::select_all(state);
}

/// Startet eine Rechteck-Selektion. Der Fokus geht dabei verloren.
pub fn begin_box_select(state: &mut EditorState, start: Vec2) {
    state.cancel_gesture();
    state.selection.set_focus(&state.collections, None);
    state.session.gesture = ActiveGesture::BoxSelecting {
        start,
        current: start,
    };
}

/// Aktualisiert das Rechteck und die Selektion der aktiven Ziele.
pub fn update_box_select(
    state: &mut EditorState,
    viewport: &dyn Viewport,
    current: Vec2,
    additive: bool,
) {
    let ActiveGesture::BoxSelecting { start, .. } = state.session.gesture else {
        return;
    };
    state.session.gesture = ActiveGesture::BoxSelecting { start, current };
    if state.active_targets().is_empty() {
        return;
    }
    let rect = ScreenRect::from_corners(start, current);
    use_cases::selection::select_points_in_rect(state, viewport, rect, additive);
}

/// Schließt die Rechteck-Selektion ab.
///
/// - Rechteck groß genug, Ziele vorhanden: erster selektierter Punkt wird fokussiert
/// - Rechteck groß genug, keine Ziele: Host selektiert seine Objekte im Polygon
/// - Rechteck zu klein: bei `clear_if_small` werden alle Selektionen aufgehoben
pub fn end_box_select(
    state: &mut EditorState,
    host: &mut dyn EditorHost,
    additive: bool,
    clear_if_small: bool,
) {
    let ActiveGesture::BoxSelecting { start, current } = state.session.gesture else {
        return;
    };
    state.session.gesture = ActiveGesture::None;

    let rect = ScreenRect::from_corners(start, current);
    let min_size = state.options.box_select_min_size_px;
    if rect.width() > min_size && rect.height() > min_size {
        if state.active_targets().is_empty() {
            let polygon = rect.unproject(host.viewport());
            host.select_items_in(&polygon, additive);
        } else {
            use_cases::selection::focus_first_selected(state);
        }
    } else if clear_if_small {
        clear_all(state, host);
    }
}

/// Öffnet das Kontextmenü eines Punktes, falls Aktionen sichtbar sind.
pub fn open_point_context_menu(state: &mut EditorState, host: &mut dyn EditorHost, point: PointRef) {
    let actions = available_actions(&state.collections, point);
    if actions.is_empty() {
        log::debug!("Keine Kontextaktionen für {:?}", point);
        return;
    }
    host.open_point_context_menu(point, &actions);
}

pub fn open_selection_context_menu(host: &mut dyn EditorHost, screen_pos: Vec2) {
    host.open_selection_context_menu(screen_pos);
}
