use crate::core::{CollectionId, PointCollectionSet, PointRef};
use crate::shared::{ChangeNotifier, SubscriptionId};
use indexmap::IndexSet;
use std::collections::HashMap;

/// Änderungs-Event der Selektion für die Render-Schicht.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    Selected(PointRef),
    Deselected(PointRef),
    Cleared,
    FocusChanged(Option<PointRef>),
}

/// Auswahlbezogener Zustand über alle aktiven Collections.
///
/// Jeder Eintrag merkt sich die Struktur-Revision seiner Collection. Ändert sich
/// die Struktur (Einfügen, Löschen, Split), sind die Indizes ungültig und werden
/// bei `revalidate` verworfen.
#[derive(Debug, Default)]
pub struct SelectionModel {
    /// Selektierte Punkte in Selektionsreihenfolge (deterministisch)
    selected: IndexSet<PointRef>,
    /// Fokussierter Punkt (Anker für Kontextmenü, ContinuePath, Drag)
    focused: Option<PointRef>,
    /// Struktur-Revision je Collection zum Zeitpunkt der Selektion
    revisions: HashMap<CollectionId, u64>,
    changed: ChangeNotifier<SelectionChange>,
}

impl SelectionModel {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_selected(&self, point: PointRef) -> bool {
        self.selected.contains(&point)
    }

    pub fn selected(&self) -> impl Iterator<Item = PointRef> + '_ {
        self.selected.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn focused(&self) -> Option<PointRef> {
        self.focused
    }

    /// Selektiert einen Punkt. `false` wenn der Verweis ungültig oder schon selektiert ist.
    pub fn select(&mut self, collections: &PointCollectionSet, point: PointRef) -> bool {
        if !self.track(collections, point) || !self.selected.insert(point) {
            return false;
        }
        self.changed.notify(&SelectionChange::Selected(point));
        true
    }

    pub fn deselect(&mut self, point: PointRef) -> bool {
        if !self.selected.shift_remove(&point) {
            return false;
        }
        self.changed.notify(&SelectionChange::Deselected(point));
        true
    }

    /// Schaltet die Selektion um und liefert den neuen Zustand.
    pub fn toggle(&mut self, collections: &PointCollectionSet, point: PointRef) -> bool {
        if self.deselect(point) {
            false
        } else {
            self.select(collections, point)
        }
    }

    /// Hebt die Selektion auf (Fokus bleibt erhalten).
    pub fn clear(&mut self) {
        if self.selected.is_empty() {
            return;
        }
        self.selected.clear();
        self.changed.notify(&SelectionChange::Cleared);
    }

    /// Setzt oder entfernt den Fokus. Ungültige Verweise werden abgelehnt.
    pub fn set_focus(&mut self, collections: &PointCollectionSet, point: Option<PointRef>) -> bool {
        if let Some(p) = point {
            if !self.track(collections, p) {
                return false;
            }
        }
        if self.focused != point {
            self.focused = point;
            self.changed.notify(&SelectionChange::FocusChanged(point));
        }
        true
    }

    /// Setzt Selektion und Fokus vollständig zurück (z.B. bei Zielwechsel).
    pub fn reset(&mut self) {
        self.clear();
        if self.focused.take().is_some() {
            self.changed.notify(&SelectionChange::FocusChanged(None));
        }
        self.revisions.clear();
    }

    /// Verwirft Einträge, deren Collection fehlt oder strukturell verändert wurde.
    pub fn revalidate(&mut self, collections: &PointCollectionSet) {
        let stale: Vec<CollectionId> = self
            .revisions
            .iter()
            .filter(|(id, revision)| {
                collections
                    .get(**id)
                    .is_none_or(|c| c.revision() != **revision)
            })
            .map(|(id, _)| *id)
            .collect();
        if stale.is_empty() {
            return;
        }

        for id in &stale {
            self.revisions.remove(id);
        }
        let dropped: Vec<PointRef> = self
            .selected
            .iter()
            .filter(|p| stale.contains(&p.collection))
            .copied()
            .collect();
        for point in dropped {
            self.deselect(point);
        }
        if self.focused.is_some_and(|p| stale.contains(&p.collection)) {
            self.focused = None;
            self.changed.notify(&SelectionChange::FocusChanged(None));
        }
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&SelectionChange) + 'static) -> SubscriptionId {
        self.changed.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.changed.unsubscribe(id)
    }

    /// Prüft den Verweis und merkt sich die aktuelle Revision der Collection.
    fn track(&mut self, collections: &PointCollectionSet, point: PointRef) -> bool {
        if collections.resolve(point).is_err() {
            return false;
        }
        self.revalidate(collections);
        if let Some(collection) = collections.get(point.collection) {
            self.revisions
                .entry(point.collection)
                .or_insert(collection.revision());
        }
        true
    }
}
