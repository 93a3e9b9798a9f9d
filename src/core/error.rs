//! Fehler-Taxonomie für Mutationen an Punkt-Collections.
//!
//! Alle Varianten werden geprüft, bevor irgendein Zustand verändert wird.
//! Ein Fehler bedeutet daher immer: keine Mutation, kein History-Eintrag.

use super::{CollectionId, TerrainPoint};

/// Abgelehnte Operation auf einer `EditablePointCollection` oder dem `PointCollectionSet`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EditError {
    /// Ein Capability-Flag verbietet die Operation (z.B. Löschen, Split am Ende).
    #[error("{operation} nicht erlaubt: {reason}")]
    InvalidOperation {
        operation: &'static str,
        reason: &'static str,
    },

    /// Index liegt außerhalb von `[0, len)` (bzw. `[0, len]` beim Einfügen).
    #[error("Index {index} außerhalb des gültigen Bereichs (len = {len})")]
    OutOfRange { index: usize, len: usize },

    /// Der erwartete Altwert stimmt nicht mit dem aktuellen Wert überein
    /// (veralteter Index nach strukturellem Umbau).
    #[error("inkonsistenter Zustand an Index {index}: erwartet {expected:?}, gefunden {actual:?}")]
    InconsistentState {
        index: usize,
        expected: TerrainPoint,
        actual: TerrainPoint,
    },

    /// Die referenzierte Collection existiert nicht (mehr).
    #[error("unbekannte Collection {0:?}")]
    UnknownCollection(CollectionId),
}

impl EditError {
    pub(crate) fn invalid(operation: &'static str, reason: &'static str) -> Self {
        Self::InvalidOperation { operation, reason }
    }
}
