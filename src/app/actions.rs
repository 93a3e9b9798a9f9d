//! Umkehrbare Punkt-Mutationen auf dem `PointCollectionSet`.
//!
//! Jede Action prüft vor der Mutation, dass der referenzierte Punkt noch den
//! erwarteten Wert hat. Veraltete Indizes führen zu `EditError`, nie zu einer
//! teilweisen Änderung.

use super::history::{ActionLog, BoxedAction, UndoableAction};
use crate::core::{CollectionId, EditError, PointCollectionSet, PointRef, TerrainPoint};

/// Undo-Verlauf über allen Collections einer Sitzung.
pub type PointHistory = ActionLog<PointCollectionSet>;
/// Boxed Action auf dem `PointCollectionSet`.
pub type PointAction = BoxedAction<PointCollectionSet>;

/// Anzeigename beim gemeinsamen Löschen mehrerer Punkte.
pub const DELETE_POINTS_NAME: &str = "Punkte löschen";

fn expect_point(
    set: &PointCollectionSet,
    target: PointRef,
    expected: TerrainPoint,
) -> Result<(), EditError> {
    let actual = set.resolve(target)?;
    if actual != expected {
        return Err(EditError::InconsistentState {
            index: target.index,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Fügt einen Punkt an `target.index` ein.
#[derive(Debug, Clone)]
pub struct InsertPointAction {
    target: PointRef,
    point: TerrainPoint,
}

impl InsertPointAction {
    pub fn new(target: PointRef, point: TerrainPoint) -> Self {
        Self { target, point }
    }
}

impl UndoableAction<PointCollectionSet> for InsertPointAction {
    fn name(&self) -> &str {
        "Punkt einfügen"
    }

    fn execute(&self, set: &mut PointCollectionSet) -> anyhow::Result<()> {
        set.try_get_mut(self.target.collection)?
            .insert(self.target.index, self.point)?;
        Ok(())
    }

    fn undo(&self, set: &mut PointCollectionSet) -> anyhow::Result<()> {
        expect_point(set, self.target, self.point)?;
        set.try_get_mut(self.target.collection)?
            .remove_raw(self.target.index)?;
        Ok(())
    }
}

/// Verschiebt einen Punkt von `old` nach `new` (Abschluss eines Drags).
#[derive(Debug, Clone)]
pub struct MovePointAction {
    target: PointRef,
    old: TerrainPoint,
    new: TerrainPoint,
}

impl MovePointAction {
    pub fn new(target: PointRef, old: TerrainPoint, new: TerrainPoint) -> Self {
        Self { target, old, new }
    }
}

impl UndoableAction<PointCollectionSet> for MovePointAction {
    fn name(&self) -> &str {
        "Punkt verschieben"
    }

    fn execute(&self, set: &mut PointCollectionSet) -> anyhow::Result<()> {
        set.try_get_mut(self.target.collection)?
            .set(self.target.index, self.old, self.new)?;
        Ok(())
    }

    fn undo(&self, set: &mut PointCollectionSet) -> anyhow::Result<()> {
        set.try_get_mut(self.target.collection)?
            .set(self.target.index, self.new, self.old)?;
        Ok(())
    }
}

/// Löscht den Punkt an `target.index`, der den Wert `point` haben muss.
#[derive(Debug, Clone)]
pub struct RemovePointAction {
    target: PointRef,
    point: TerrainPoint,
}

impl RemovePointAction {
    /// Liest den aktuellen Wert aus dem Set; schlägt bei veraltetem Index fehl.
    pub fn capture(set: &PointCollectionSet, target: PointRef) -> Result<Self, EditError> {
        let point = set.resolve(target)?;
        Ok(Self { target, point })
    }
}

impl UndoableAction<PointCollectionSet> for RemovePointAction {
    fn name(&self) -> &str {
        "Punkt löschen"
    }

    fn execute(&self, set: &mut PointCollectionSet) -> anyhow::Result<()> {
        expect_point(set, self.target, self.point)?;
        set.try_get_mut(self.target.collection)?
            .remove_at(self.target.index)?;
        Ok(())
    }

    fn undo(&self, set: &mut PointCollectionSet) -> anyhow::Result<()> {
        set.try_get_mut(self.target.collection)?
            .insert_raw(self.target.index, self.point)?;
        Ok(())
    }
}

/// Teilt eine Collection; der hintere Teil erhält eine vorab reservierte ID,
/// damit Redo dieselbe Identität wiederherstellt.
#[derive(Debug, Clone)]
pub struct SplitPathAction {
    source: CollectionId,
    index: usize,
    new_collection: CollectionId,
}

impl SplitPathAction {
    pub fn new(source: CollectionId, index: usize, new_collection: CollectionId) -> Self {
        Self {
            source,
            index,
            new_collection,
        }
    }

    /// ID der beim Split entstehenden Collection.
    pub fn new_collection(&self) -> CollectionId {
        self.new_collection
    }
}

impl UndoableAction<PointCollectionSet> for SplitPathAction {
    fn name(&self) -> &str {
        "Pfad teilen"
    }

    fn execute(&self, set: &mut PointCollectionSet) -> anyhow::Result<()> {
        set.split_collection(self.source, self.index, self.new_collection)?;
        Ok(())
    }

    fn undo(&self, set: &mut PointCollectionSet) -> anyhow::Result<()> {
        set.merge_split(self.source, self.new_collection)?;
        Ok(())
    }
}
