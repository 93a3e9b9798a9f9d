//! Handler für Punkt-Editing (Einfügen, Löschen, Ziehen, Teilen).

use crate::app::use_cases;
use crate::app::{EditorHost, EditorState};
use crate::core::{PointRef, TerrainPoint};
use crate::shared::Viewport;
use glam::Vec2;

/// Fügt einen Punkt zwischen zwei bestehenden ein.
pub fn insert_point(state: &mut EditorState, target: PointRef, point: TerrainPoint) -> anyhow::Result<()> {
    use_cases::editing::insert_point(state, target, point)
}

/// Verlängert den primären Pfad (ContinuePath).
pub fn extend_path(state: &mut EditorState, target: PointRef, point: TerrainPoint) -> anyhow::Result<()> {
    use_cases::editing::extend_path(state, target, point)
}

/// Löscht die übergebenen Punkte als einen Undo-Schritt.
pub fn delete_points(state: &mut EditorState, points: &[PointRef]) -> anyhow::Result<()> {
    use_cases::editing::delete_points(state, points)
}

/// Löscht einen Punkt über das Kontextmenü.
pub fn delete_point(state: &mut EditorState, point: PointRef) -> anyhow::Result<()> {
    use_cases::editing::delete_point(state, point)
}

/// Teilt den Pfad am Punkt.
pub fn split_path(state: &mut EditorState, point: PointRef) -> anyhow::Result<()> {
    let new_id = use_cases::editing::split_path(state, point)?;
    log::info!("Pfad {:?} geteilt, neuer Teil {:?}", point.collection, new_id);
    Ok(())
}

/// Reicht einen freien Punkt an den Host weiter (InsertPoint-Modus).
pub fn insert_free_point(host: &mut dyn EditorHost, point: TerrainPoint) {
    host.insert_free_point(point);
}

/// Reicht das Löschen an den Host weiter.
pub fn delete_host_selection(host: &mut dyn EditorHost) {
    host.delete_selection();
}

pub fn begin_drag(state: &mut EditorState, point: PointRef, press_screen: Vec2) -> anyhow::Result<()> {
    use_cases::editing::begin_drag(state, point, press_screen)?;
    Ok(())
}

pub fn update_drag(state: &mut EditorState, viewport: &dyn Viewport, screen_pos: Vec2) -> anyhow::Result<()> {
    use_cases::editing::update_drag(state, viewport, screen_pos)?;
    Ok(())
}

pub fn end_drag(state: &mut EditorState) -> anyhow::Result<()> {
    use_cases::editing::end_drag(state)
}
