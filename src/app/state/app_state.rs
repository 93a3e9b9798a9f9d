//! Editor-State: zentrale Datenhaltung einer Edit-Sitzung.

use super::editor::{ActiveGesture, EditMode, EditSessionState, EditTargets};
use super::selection::SelectionModel;
use crate::app::actions::{PointAction, PointHistory};
use crate::app::CommandLog;
use crate::core::{CollectionId, PointCollectionSet, PointRef, TerrainPoint};
use crate::shared::EditorOptions;

/// Hauptzustand des Punkt-Editors.
pub struct EditorState {
    /// Alle bekannten Collections (auch nicht aktiv bearbeitete)
    pub collections: PointCollectionSet,
    /// Selektion und Fokus
    pub selection: SelectionModel,
    /// Ziele, Modus und laufende Geste
    pub session: EditSessionState,
    /// Undo/Redo-Verlauf
    pub history: PointHistory,
    /// Log ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Schwellwerte, Modifier)
    pub options: EditorOptions,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorState {
    /// Erstellt einen leeren State mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            collections: PointCollectionSet::new(),
            selection: SelectionModel::new(),
            session: EditSessionState::new(),
            history: PointHistory::new_with_capacity(options.history_max_depth),
            command_log: CommandLog::new(),
            options,
        }
    }

    /// Setzt eine einzelne Collection als Bearbeitungsziel (`None` beendet die Bearbeitung).
    pub fn set_edit_points(&mut self, target: Option<CollectionId>) {
        let targets = target.map_or(EditTargets::Empty, EditTargets::Single);
        self.retarget(targets, target);
    }

    /// Setzt mehrere Collections gleichzeitig als Ziel. Die Selektion wird verworfen.
    pub fn set_multi_edit_points(&mut self, targets: Vec<CollectionId>) {
        let targets = if targets.is_empty() {
            EditTargets::Empty
        } else {
            EditTargets::Multi(targets)
        };
        self.retarget(targets, None);
    }

    /// Setzt den Umriss für Rechtsklick-Treffer.
    pub fn set_outline(&mut self, outline: Option<Vec<Vec<TerrainPoint>>>) {
        self.session.outline = outline;
    }

    fn retarget(&mut self, targets: EditTargets, primary: Option<CollectionId>) {
        self.cancel_gesture();
        self.selection.reset();
        self.session.targets = targets;
        self.session.primary = primary;
        self.session.derived.clear();
        if self.session.mode == EditMode::ContinuePath {
            self.session.mode = EditMode::None;
        }
        self.session.reset_mode_data();
        log::debug!("Bearbeitungsziele gesetzt: {:?}", self.session.targets);
    }

    /// Aktive Ziele, die im Set tatsächlich existieren.
    pub fn active_targets(&self) -> Vec<CollectionId> {
        self.session
            .target_ids()
            .into_iter()
            .filter(|id| self.collections.contains(*id))
            .collect()
    }

    pub fn is_active(&self, id: CollectionId) -> bool {
        self.collections.contains(id) && self.session.target_ids().contains(&id)
    }

    pub fn mode(&self) -> EditMode {
        self.session.mode
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo_name(&self) -> Option<&str> {
        self.history.undo_name()
    }

    pub fn redo_name(&self) -> Option<&str> {
        self.history.redo_name()
    }

    /// Fokussierter Endpunkt der primären Collection, an dem weitergezeichnet werden kann.
    pub fn continue_anchor(&self) -> Option<PointRef> {
        let focused = self.selection.focused()?;
        let primary = self.session.primary?;
        if focused.collection != primary || !self.is_active(primary) {
            return None;
        }
        let collection = self.collections.get(primary)?;
        (collection.capabilities().can_insert_at_ends && collection.is_end_index(focused.index))
            .then_some(focused)
    }

    /// Vorschau-Segment vom Anker zur Zeigerposition im ContinuePath-Modus.
    pub fn continue_path_preview(&self) -> Option<(TerrainPoint, TerrainPoint)> {
        if self.session.mode != EditMode::ContinuePath {
            return None;
        }
        let anchor = self.continue_anchor()?;
        let cursor = self.session.cursor?;
        let from = self.collections.resolve(anchor).ok()?;
        Some((from, cursor))
    }

    /// Führt eine Action aus und legt sie im Verlauf ab.
    ///
    /// Schlägt die Action fehl, bleiben Set und Verlauf unverändert.
    pub fn apply(&mut self, action: PointAction) -> anyhow::Result<()> {
        action.execute(&mut self.collections)?;
        log::info!("{} ausgeführt", action.name());
        self.history.push(action);
        self.selection.revalidate(&self.collections);
        Ok(())
    }

    /// Bricht die laufende Geste ab und verwirft eine Drag-Vorschau.
    pub fn cancel_gesture(&mut self) {
        if let ActiveGesture::Dragging { target, .. } = std::mem::take(&mut self.session.gesture) {
            if let Some(collection) = self.collections.get_mut(target.collection) {
                collection.clear_preview();
            }
        }
    }
}
