//! Schnittstelle zur umgebenden Anwendung.
//!
//! Der Editor kennt weder Fenster noch Objektmodell. Alles, was über die
//! Punkt-Collections hinausgeht, reicht er über `EditorHost` nach außen.

use crate::app::context_menu::ContextActionDescriptor;
use crate::core::{PointRef, TerrainPoint, TerrainPolygon};
use crate::shared::{ScaledViewport, Viewport};
use glam::Vec2;

/// Rückkanal des Editors zum Host.
pub trait EditorHost {
    /// Aktuelle Projektion Terrain ↔ Screen.
    fn viewport(&self) -> &dyn Viewport;

    /// Freien Punkt anlegen (InsertPoint-Modus, nicht Teil einer Collection).
    fn insert_free_point(&mut self, point: TerrainPoint);

    /// Eigene Selektion des Hosts aufheben.
    fn clear_selection(&mut self);

    /// Eigene Selektion des Hosts löschen (Entf ohne selektierte Punkte).
    fn delete_selection(&mut self) {}

    /// Objekte des Hosts im Polygon selektieren (Rechteck-Selektion ohne Ziele).
    fn select_items_in(&mut self, _polygon: &TerrainPolygon, _additive: bool) {}

    /// Kontextmenü für einen Punkt anzeigen.
    fn open_point_context_menu(&mut self, _point: PointRef, _actions: &[ContextActionDescriptor]) {
    }

    /// Kontextmenü der Host-Selektion an einer Screen-Position anzeigen.
    fn open_selection_context_menu(&mut self, _screen_pos: Vec2) {}
}

/// Host ohne eigene Objekte: ignoriert alle Rückmeldungen.
#[derive(Debug, Clone, Default)]
pub struct NullHost {
    pub viewport: ScaledViewport,
}

impl NullHost {
    pub fn new(viewport: ScaledViewport) -> Self {
        Self { viewport }
    }
}

impl EditorHost for NullHost {
    fn viewport(&self) -> &dyn Viewport {
        &self.viewport
    }

    fn insert_free_point(&mut self, point: TerrainPoint) {
        log::debug!("Freier Punkt ohne Host verworfen: {:?}", point);
    }

    fn clear_selection(&mut self) {}
}
