//! Modus- und Gesten-Zustand einer Edit-Sitzung.

use crate::core::{CollectionId, PointRef, TerrainPoint};
use glam::Vec2;

/// Aktiver Bearbeitungsmodus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    /// Standard: Punkte fokussieren, ziehen, Rechteck-Selektion
    #[default]
    None,
    /// Klick auf freie Fläche fügt über den Host einen freien Punkt ein
    InsertPoint,
    /// Klick verlängert den fokussierten Pfad an seinem Endpunkt
    ContinuePath,
}

/// Laufende Zeiger-Geste. Es ist immer höchstens eine aktiv.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ActiveGesture {
    #[default]
    None,
    /// Punkt wird gezogen; Änderungen laufen bis zum Loslassen als Vorschau
    Dragging {
        target: PointRef,
        /// Screen-Position beim Drücken
        press_screen: Vec2,
        /// Committeter Wert beim Drücken
        start_point: TerrainPoint,
        /// Zuletzt als Vorschau gesetzter Wert
        current: TerrainPoint,
        /// Zeiger wurde übernommen (Punkt war beim ersten Move fokussiert)
        captured: bool,
    },
    /// Rechteck-Selektion in Screen-Koordinaten
    BoxSelecting { start: Vec2, current: Vec2 },
}

impl ActiveGesture {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// Welche Zielmenge gerade bearbeitet wird.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditTargets {
    #[default]
    Empty,
    /// Genau eine Collection (Doppelklick-Einfügen, ContinuePath)
    Single(CollectionId),
    /// Mehrere Collections gleichzeitig; der primäre Pfad ergibt sich erst
    /// über `ContinuePathFrom`
    Multi(Vec<CollectionId>),
}

/// Zustand der laufenden Edit-Sitzung.
#[derive(Debug, Clone, Default)]
pub struct EditSessionState {
    /// Aktuelle Zielmenge
    pub targets: EditTargets,
    /// Primäre Collection (bei Einzelziel oder nach `ContinuePathFrom`)
    pub primary: Option<CollectionId>,
    /// Beim Split entstandene Collections, die mitbearbeitet werden
    pub derived: Vec<CollectionId>,
    /// Optionaler Umriss für Rechtsklick-Treffer ohne eigene Marker
    pub outline: Option<Vec<Vec<TerrainPoint>>>,
    /// Aktiver Modus
    pub mode: EditMode,
    /// ContinuePath wurde über die Modifier-Taste betreten; nur dann beendet Loslassen den Modus
    pub entered_via_modifier: bool,
    /// Letzte Zeigerposition im ContinuePath-Modus (Vorschau-Segment)
    pub cursor: Option<TerrainPoint>,
    /// Laufende Geste
    pub gesture: ActiveGesture,
}

impl EditSessionState {
    /// Erstellt eine leere Sitzung ohne Ziele.
    pub fn new() -> Self {
        Self::default()
    }

    /// Alle Ziel-IDs in Darstellungsreihenfolge (später gezeichnete zuletzt).
    pub fn target_ids(&self) -> Vec<CollectionId> {
        let mut ids = match &self.targets {
            EditTargets::Empty => Vec::new(),
            EditTargets::Single(id) => vec![*id],
            EditTargets::Multi(ids) => ids.clone(),
        };
        ids.extend(self.derived.iter().copied());
        ids
    }

    pub fn is_multi(&self) -> bool {
        matches!(self.targets, EditTargets::Multi(_))
    }

    /// Setzt Modus-Zusatzdaten zurück (Modus selbst bleibt).
    pub(crate) fn reset_mode_data(&mut self) {
        self.entered_via_modifier = false;
        self.cursor = None;
    }
}
