//! Editierbare, geordnete Punktfolge (Pfad oder Polygon) mit Capability-Flags.
//!
//! Die Collection ist ein reines Mutations-Primitiv: sie prüft Policy und Indizes,
//! verändert die Punktfolge und benachrichtigt Beobachter. Undo-Aufzeichnung ist
//! Sache des Aufrufers (siehe `app::actions`).

use super::{EditError, TerrainPath, TerrainPoint, TerrainPolygon};
use crate::shared::{ChangeNotifier, SubscriptionId};

/// Statische Policy einer Collection, nach der Konstruktion nur lesbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointCollectionCapabilities {
    /// Punkte dürfen zwischen zwei bestehende Punkte eingefügt werden
    pub can_insert_between: bool,
    /// Punkte dürfen vor dem ersten bzw. nach dem letzten Punkt eingefügt werden
    pub can_insert_at_ends: bool,
    /// Einzelne Punkte dürfen gelöscht werden
    pub can_delete_point: bool,
    /// Die Collection darf an einem inneren Punkt geteilt werden
    pub can_split: bool,
    /// Die ersten 4 Punkte bilden ein festes Viereck statt eines Pfades
    pub is_object_square: bool,
}

impl PointCollectionCapabilities {
    /// Offener Pfad: alle Operationen erlaubt.
    pub const fn path() -> Self {
        Self {
            can_insert_between: true,
            can_insert_at_ends: true,
            can_delete_point: true,
            can_split: true,
            is_object_square: false,
        }
    }

    /// Polygon-Ring: Einfügen zwischen Punkten und Löschen, kein Split, keine Enden.
    pub const fn polygon() -> Self {
        Self {
            can_insert_between: true,
            can_insert_at_ends: false,
            can_delete_point: true,
            can_split: false,
            is_object_square: false,
        }
    }

    /// Objekt-Viereck: Eckpunkte nur verschiebbar.
    pub const fn object_square() -> Self {
        Self {
            can_insert_between: false,
            can_insert_at_ends: false,
            can_delete_point: false,
            can_split: false,
            is_object_square: true,
        }
    }
}

/// Änderungs-Event einer Collection für Render-Schicht und Controller.
#[derive(Debug, Clone, PartialEq)]
pub enum CollectionChange {
    Inserted {
        index: usize,
        point: TerrainPoint,
    },
    Removed {
        index: usize,
        point: TerrainPoint,
    },
    Replaced {
        index: usize,
        old: TerrainPoint,
        new: TerrainPoint,
    },
    /// Transiente Drag-Vorschau, nicht Teil der History
    Previewed {
        index: usize,
        point: TerrainPoint,
    },
    PreviewCleared,
    /// Alles ab `len` wurde abgetrennt (Split)
    Truncated {
        len: usize,
    },
    /// `count` Punkte wurden ab `start` angehängt (Split rückgängig)
    Appended {
        start: usize,
        count: usize,
    },
}

/// Geordnete Punktfolge, deren Reihenfolge die Form des Pfades/Polygons bestimmt.
#[derive(Debug)]
pub struct EditablePointCollection {
    points: Vec<TerrainPoint>,
    capabilities: PointCollectionCapabilities,
    /// Drag-Vorschau: (Index, angezeigte Position), ändert `points` nicht
    preview: Option<(usize, TerrainPoint)>,
    /// Zählt strukturelle Änderungen (Einfügen, Löschen, Split)
    revision: u64,
    changed: ChangeNotifier<CollectionChange>,
}

impl EditablePointCollection {
    pub fn new(points: Vec<TerrainPoint>, capabilities: PointCollectionCapabilities) -> Self {
        Self {
            points,
            capabilities,
            preview: None,
            revision: 0,
            changed: ChangeNotifier::new(),
        }
    }

    pub fn capabilities(&self) -> PointCollectionCapabilities {
        self.capabilities
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Übernommene Punkte (ohne Drag-Vorschau).
    pub fn points(&self) -> &[TerrainPoint] {
        &self.points
    }

    pub fn get(&self, index: usize) -> Option<TerrainPoint> {
        self.points.get(index).copied()
    }

    /// Angezeigte Position eines Punktes (Drag-Vorschau hat Vorrang).
    pub fn display_point(&self, index: usize) -> Option<TerrainPoint> {
        match self.preview {
            Some((preview_index, point)) if preview_index == index => Some(point),
            _ => self.get(index),
        }
    }

    /// Aktuelle Drag-Vorschau, falls vorhanden.
    pub fn preview(&self) -> Option<(usize, TerrainPoint)> {
        self.preview
    }

    /// Strukturelle Revision; ändert sich bei jeder Index-Verschiebung.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_end_index(&self, index: usize) -> bool {
        !self.points.is_empty() && (index == 0 || index == self.points.len() - 1)
    }

    pub fn as_path(&self) -> TerrainPath<'_> {
        TerrainPath::new(&self.points)
    }

    /// Viereck aus den ersten 4 Punkten, nur für Object-Squares.
    pub fn object_square(&self) -> Option<TerrainPolygon> {
        self.capabilities
            .is_object_square
            .then(|| TerrainPolygon::new(self.points.iter().take(4).copied().collect()))
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&CollectionChange) + 'static) -> SubscriptionId {
        self.changed.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.changed.unsubscribe(id)
    }

    // ── Policy-geprüfte Mutationen ──────────────────────────────────

    /// Fügt `point` an `index` ein (`index == len` hängt an).
    pub fn insert(&mut self, index: usize, point: TerrainPoint) -> Result<(), EditError> {
        if index > self.points.len() {
            return Err(EditError::OutOfRange {
                index,
                len: self.points.len(),
            });
        }
        let at_end = index == 0 || index == self.points.len();
        if at_end && !self.capabilities.can_insert_at_ends {
            return Err(EditError::invalid(
                "insert",
                "Einfügen an den Enden nicht erlaubt",
            ));
        }
        if !at_end && !self.capabilities.can_insert_between {
            return Err(EditError::invalid(
                "insert",
                "Einfügen zwischen Punkten nicht erlaubt",
            ));
        }
        self.insert_raw(index, point)
    }

    /// Hängt `point` ans Ende an.
    pub fn add(&mut self, point: TerrainPoint) -> Result<(), EditError> {
        self.insert(self.points.len(), point)
    }

    /// Ersetzt den Punkt an `index`, sofern dort noch `old` steht.
    pub fn set(
        &mut self,
        index: usize,
        old: TerrainPoint,
        new: TerrainPoint,
    ) -> Result<(), EditError> {
        let actual = self.checked_get(index)?;
        if actual != old {
            return Err(EditError::InconsistentState {
                index,
                expected: old,
                actual,
            });
        }
        self.points[index] = new;
        if matches!(self.preview, Some((i, _)) if i == index) {
            self.preview = None;
        }
        self.changed
            .notify(&CollectionChange::Replaced { index, old, new });
        Ok(())
    }

    /// Zeigt `point` transient an `index` an, ohne die Punktfolge zu ändern.
    pub fn preview_set(&mut self, index: usize, point: TerrainPoint) -> Result<(), EditError> {
        self.checked_get(index)?;
        self.preview = Some((index, point));
        self.changed
            .notify(&CollectionChange::Previewed { index, point });
        Ok(())
    }

    /// Verwirft eine laufende Drag-Vorschau.
    pub fn clear_preview(&mut self) {
        if self.preview.take().is_some() {
            self.changed.notify(&CollectionChange::PreviewCleared);
        }
    }

    /// Entfernt den Punkt an `index` und gibt ihn zurück.
    pub fn remove_at(&mut self, index: usize) -> Result<TerrainPoint, EditError> {
        if !self.capabilities.can_delete_point {
            return Err(EditError::invalid(
                "remove_at",
                "Löschen von Punkten nicht erlaubt",
            ));
        }
        self.remove_raw(index)
    }

    /// Teilt die Collection am inneren Punkt `index`.
    ///
    /// `self` behält `[0, index]`, zurückgegeben wird `[index, len)`. Der Teilungspunkt
    /// gehört damit zu beiden Hälften.
    pub fn split_at(&mut self, index: usize) -> Result<Vec<TerrainPoint>, EditError> {
        if !self.capabilities.can_split {
            return Err(EditError::invalid("split_at", "Teilen nicht erlaubt"));
        }
        self.checked_get(index)?;
        if self.is_end_index(index) {
            return Err(EditError::invalid(
                "split_at",
                "Teilen am Anfangs- oder Endpunkt nicht möglich",
            ));
        }
        let tail = self.points[index..].to_vec();
        self.points.truncate(index + 1);
        self.structure_changed(CollectionChange::Truncated {
            len: self.points.len(),
        });
        Ok(tail)
    }

    // ── Undo-Primitive ohne Policy-Prüfung (nur Bereichsprüfung) ────

    pub(crate) fn insert_raw(&mut self, index: usize, point: TerrainPoint) -> Result<(), EditError> {
        if index > self.points.len() {
            return Err(EditError::OutOfRange {
                index,
                len: self.points.len(),
            });
        }
        self.points.insert(index, point);
        self.structure_changed(CollectionChange::Inserted { index, point });
        Ok(())
    }

    pub(crate) fn remove_raw(&mut self, index: usize) -> Result<TerrainPoint, EditError> {
        self.checked_get(index)?;
        let point = self.points.remove(index);
        self.structure_changed(CollectionChange::Removed { index, point });
        Ok(point)
    }

    pub(crate) fn append_raw(&mut self, points: &[TerrainPoint]) {
        if points.is_empty() {
            return;
        }
        let start = self.points.len();
        self.points.extend_from_slice(points);
        self.structure_changed(CollectionChange::Appended {
            start,
            count: points.len(),
        });
    }

    fn checked_get(&self, index: usize) -> Result<TerrainPoint, EditError> {
        self.get(index).ok_or(EditError::OutOfRange {
            index,
            len: self.points.len(),
        })
    }

    fn structure_changed(&mut self, change: CollectionChange) {
        self.revision += 1;
        self.preview = None;
        self.changed.notify(&change);
    }
}
