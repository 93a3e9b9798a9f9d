use crate::app::state::EditMode;
use crate::core::{PointRef, TerrainPoint};
use glam::Vec2;

/// Commands sind die Entscheidungen des Controllers, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorCommand {
    // ── Modi ────────────────────────────────────────────────────────
    /// Modus setzen (`None` beendet ContinuePath/InsertPoint)
    SetEditMode { mode: EditMode },
    /// ContinuePath ab einem Endpunkt starten
    ContinuePathFrom { point: PointRef, via_modifier: bool },

    // ── Editing ─────────────────────────────────────────────────────
    /// Punkt in eine Collection einfügen (Doppelklick auf Pfad)
    InsertPoint { target: PointRef, point: TerrainPoint },
    /// Pfad am Endpunkt verlängern und neuen Endpunkt fokussieren
    ExtendPath { target: PointRef, point: TerrainPoint },
    /// Mehrere Punkte als ein Undo-Schritt löschen
    DeletePoints { points: Vec<PointRef> },
    /// Einzelnen Punkt löschen (Kontextmenü)
    DeletePoint { point: PointRef },
    /// Pfad am Punkt teilen
    SplitPath { point: PointRef },
    /// Freien Punkt über den Host anlegen (InsertPoint-Modus)
    InsertFreePoint { point: TerrainPoint },
    /// Löschen an den Host weiterreichen (keine Punkte selektiert)
    DeleteHostSelection,

    // ── Gesten ──────────────────────────────────────────────────────
    /// Punkt fokussieren, optional zusätzlich selektieren
    FocusPoint { point: PointRef, select: bool },
    BeginDrag { point: PointRef, press_screen: Vec2 },
    UpdateDrag { screen_pos: Vec2 },
    EndDrag,
    BeginBoxSelect { start: Vec2 },
    UpdateBoxSelect { current: Vec2, additive: bool },
    /// Rechteck-Selektion abschließen; zu kleine Rechtecke heben bei
    /// `clear_if_small` die Selektion auf
    EndBoxSelect { additive: bool, clear_if_small: bool },
    /// Laufende Geste verwerfen (Drag-Vorschau wird zurückgenommen)
    CancelGesture,
    /// Zeigerposition für die ContinuePath-Vorschau
    UpdateCursor { point: TerrainPoint },
    /// Event verbrauchen, ohne etwas zu verändern (Rechtsklick auf Pfad/Umriss)
    Consume,

    // ── Kontextmenüs ────────────────────────────────────────────────
    OpenPointContextMenu { point: PointRef },
    OpenSelectionContextMenu { screen_pos: Vec2 },

    // ── Selektion ───────────────────────────────────────────────────
    ClearSelection,
    /// Punkt-Selektion und Host-Selektion aufheben (Klick ins Leere)
    ClearAllSelections,
    SelectAll,

    // ── History ─────────────────────────────────────────────────────
    Undo,
    Redo,
}

impl EditorCommand {
    /// Fortlaufende Zeiger-Updates, die pro Mausbewegung anfallen.
    pub fn is_pointer_update(&self) -> bool {
        matches!(
            self,
            Self::UpdateDrag { .. } | Self::UpdateBoxSelect { .. } | Self::UpdateCursor { .. }
        )
    }
}
