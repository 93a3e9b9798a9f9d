//! Arena aller editierbaren Collections einer Sitzung.
//!
//! Collections werden über `CollectionId` adressiert, einzelne Punkte über `PointRef`.
//! Ein `PointRef` ist nur für das aktuelle Event gültig und wird vor jeder
//! Verwendung gegen die Arena revalidiert.

use super::{EditError, EditablePointCollection, TerrainPoint};
use crate::shared::{ChangeNotifier, SubscriptionId};
use indexmap::IndexMap;

/// Stabile Identität einer Collection innerhalb eines `PointCollectionSet`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CollectionId(u64);

impl CollectionId {
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Verweis auf einen Punkt: Collection + Index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointRef {
    pub collection: CollectionId,
    pub index: usize,
}

impl PointRef {
    pub const fn new(collection: CollectionId, index: usize) -> Self {
        Self { collection, index }
    }
}

/// Änderungen an der Menge der Collections (nicht an deren Inhalt).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionSetChange {
    Added(CollectionId),
    Removed(CollectionId),
}

/// Container aller Collections in Einfügereihenfolge.
#[derive(Debug, Default)]
pub struct PointCollectionSet {
    collections: IndexMap<CollectionId, EditablePointCollection>,
    next_id: u64,
    changed: ChangeNotifier<CollectionSetChange>,
}

impl PointCollectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Übernimmt eine Collection und vergibt eine neue ID.
    pub fn add(&mut self, collection: EditablePointCollection) -> CollectionId {
        let id = self.reserve_id();
        self.insert_with_id(id, collection);
        id
    }

    /// Reserviert eine ID, ohne eine Collection anzulegen (für wiederholbare Splits).
    pub fn reserve_id(&mut self) -> CollectionId {
        let id = CollectionId(self.next_id);
        self.next_id += 1;
        id
    }

    pub(crate) fn insert_with_id(&mut self, id: CollectionId, collection: EditablePointCollection) {
        self.collections.insert(id, collection);
        self.changed.notify(&CollectionSetChange::Added(id));
    }

    /// Entfernt eine Collection (Reihenfolge der übrigen bleibt erhalten).
    pub fn remove(&mut self, id: CollectionId) -> Option<EditablePointCollection> {
        let removed = self.collections.shift_remove(&id);
        if removed.is_some() {
            self.changed.notify(&CollectionSetChange::Removed(id));
        }
        removed
    }

    pub fn get(&self, id: CollectionId) -> Option<&EditablePointCollection> {
        self.collections.get(&id)
    }

    pub fn get_mut(&mut self, id: CollectionId) -> Option<&mut EditablePointCollection> {
        self.collections.get_mut(&id)
    }

    pub fn try_get(&self, id: CollectionId) -> Result<&EditablePointCollection, EditError> {
        self.get(id).ok_or(EditError::UnknownCollection(id))
    }

    pub fn try_get_mut(
        &mut self,
        id: CollectionId,
    ) -> Result<&mut EditablePointCollection, EditError> {
        self.get_mut(id).ok_or(EditError::UnknownCollection(id))
    }

    pub fn contains(&self, id: CollectionId) -> bool {
        self.collections.contains_key(&id)
    }

    pub fn ids(&self) -> impl Iterator<Item = CollectionId> + '_ {
        self.collections.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (CollectionId, &EditablePointCollection)> {
        self.collections.iter().map(|(id, c)| (*id, c))
    }

    pub fn len(&self) -> usize {
        self.collections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }

    /// Revalidiert einen Punkt-Verweis und liefert den übernommenen Wert.
    pub fn resolve(&self, point: PointRef) -> Result<TerrainPoint, EditError> {
        let collection = self.try_get(point.collection)?;
        collection.get(point.index).ok_or(EditError::OutOfRange {
            index: point.index,
            len: collection.len(),
        })
    }

    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&CollectionSetChange) + 'static,
    ) -> SubscriptionId {
        self.changed.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.changed.unsubscribe(id)
    }

    /// Teilt `source` an `index`; der hintere Teil wird Collection `new_id`
    /// mit denselben Capabilities.
    pub fn split_collection(
        &mut self,
        source: CollectionId,
        index: usize,
        new_id: CollectionId,
    ) -> Result<(), EditError> {
        if self.contains(new_id) {
            return Err(EditError::invalid("split", "Ziel-ID bereits vergeben"));
        }
        let collection = self.try_get_mut(source)?;
        let capabilities = collection.capabilities();
        let tail = collection.split_at(index)?;
        self.insert_with_id(new_id, EditablePointCollection::new(tail, capabilities));
        Ok(())
    }

    /// Kehrt `split_collection` um: entfernt `split_id` und hängt dessen Punkte
    /// (ohne den gemeinsamen Teilungspunkt) wieder an `source` an.
    pub fn merge_split(
        &mut self,
        source: CollectionId,
        split_id: CollectionId,
    ) -> Result<(), EditError> {
        self.try_get(source)?;
        let tail = self
            .remove(split_id)
            .ok_or(EditError::UnknownCollection(split_id))?;
        let rest = tail.points().get(1..).unwrap_or_default();
        self.try_get_mut(source)?.append_raw(rest);
        Ok(())
    }
}
