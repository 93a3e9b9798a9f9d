//! Kontextaktionen für einen einzelnen Punkt.
//!
//! Architektur:
//! - `ContextActionId`: Eindeutige Identifikation jeder Aktion
//! - `Precondition`: Vorbedingung, die zur Laufzeit gegen die Collection geprüft wird
//! - `CATALOG`: Statischer Katalog (Sichtbarkeit über Capability, Freigabe über Index)
//! - `available_actions()`: Liefert die sichtbaren Aktionen mit Freigabe-Status
//!
//! Vor der Ausführung wird die Freigabe erneut geprüft, da der Punkt seit dem
//! Öffnen des Menüs verändert worden sein kann.

use crate::core::{EditablePointCollection, PointCollectionSet, PointRef};

/// Eindeutige ID einer Kontextaktion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextActionId {
    /// Pfad am Punkt teilen
    SplitPath,
    /// Pfad ab diesem Endpunkt weiterzeichnen
    ContinuePath,
    /// Punkt löschen
    DeletePoint,
}

/// Prüfbare Vorbedingung einer Kontextaktion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precondition {
    CanSplit,
    CanInsertAtEnds,
    CanDeletePoint,
    /// Punkt ist weder erster noch letzter
    IsInteriorPoint,
    /// Punkt ist erster oder letzter
    IsEndPoint,
}

impl Precondition {
    /// Prüft die Vorbedingung für den Punkt an `index`.
    pub fn is_valid(&self, collection: &EditablePointCollection, index: usize) -> bool {
        let caps = collection.capabilities();
        match self {
            Self::CanSplit => caps.can_split,
            Self::CanInsertAtEnds => caps.can_insert_at_ends,
            Self::CanDeletePoint => caps.can_delete_point,
            Self::IsInteriorPoint => index < collection.len() && !collection.is_end_index(index),
            Self::IsEndPoint => collection.is_end_index(index),
        }
    }
}

/// Katalog-Eintrag: sichtbar wenn `visible_if` gilt, aktiv wenn zusätzlich `enabled_if` gilt.
struct CatalogEntry {
    id: ContextActionId,
    label: &'static str,
    visible_if: Precondition,
    enabled_if: Option<Precondition>,
}

const CATALOG: [CatalogEntry; 3] = [
    CatalogEntry {
        id: ContextActionId::SplitPath,
        label: "Pfad teilen",
        visible_if: Precondition::CanSplit,
        enabled_if: Some(Precondition::IsInteriorPoint),
    },
    CatalogEntry {
        id: ContextActionId::ContinuePath,
        label: "Pfad fortsetzen",
        visible_if: Precondition::CanInsertAtEnds,
        enabled_if: Some(Precondition::IsEndPoint),
    },
    CatalogEntry {
        id: ContextActionId::DeletePoint,
        label: "Punkt löschen",
        visible_if: Precondition::CanDeletePoint,
        enabled_if: None,
    },
];

/// Sichtbare Kontextaktion mit Freigabe-Status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextActionDescriptor {
    pub id: ContextActionId,
    pub label: &'static str,
    pub enabled: bool,
}

/// Alle für den Punkt sichtbaren Aktionen. Leer, wenn der Verweis ungültig ist.
pub fn available_actions(
    collections: &PointCollectionSet,
    point: PointRef,
) -> Vec<ContextActionDescriptor> {
    let Some(collection) = collections.get(point.collection) else {
        return Vec::new();
    };
    if point.index >= collection.len() {
        return Vec::new();
    }

    CATALOG
        .iter()
        .filter(|entry| entry.visible_if.is_valid(collection, point.index))
        .map(|entry| ContextActionDescriptor {
            id: entry.id,
            label: entry.label,
            enabled: entry
                .enabled_if
                .is_none_or(|p| p.is_valid(collection, point.index)),
        })
        .collect()
}

/// Ob die Aktion für den Punkt jetzt noch ausführbar ist.
pub fn is_action_enabled(
    collections: &PointCollectionSet,
    point: PointRef,
    action: ContextActionId,
) -> bool {
    available_actions(collections, point)
        .iter()
        .any(|d| d.id == action && d.enabled)
}
