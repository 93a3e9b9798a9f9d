use crate::shared::options::HISTORY_MAX_DEPTH;

/// Umkehrbare Mutation auf einem Ziel vom Typ `T`.
///
/// Vertrag: `undo()` nach `execute()` stellt exakt den vorherigen beobachtbaren
/// Zustand wieder her, inklusive Index-Positionen.
pub trait UndoableAction<T: ?Sized> {
    /// Anzeigename für Undo/Redo-Menüs.
    fn name(&self) -> &str;
    fn execute(&self, target: &mut T) -> anyhow::Result<()>;
    fn undo(&self, target: &mut T) -> anyhow::Result<()>;
}

/// Boxed Action, wie sie im `ActionLog` gespeichert wird.
pub type BoxedAction<T> = Box<dyn UndoableAction<T>>;

/// Geordnete Folge von Actions, die als ein Undo-Schritt gilt.
///
/// `execute` läuft vorwärts, `undo` strikt rückwärts. Verschachtelte Composites
/// verhalten sich wie eine flache Liste.
pub struct CompositeAction<T: ?Sized> {
    actions: Vec<BoxedAction<T>>,
    name: String,
}

impl<T: ?Sized> CompositeAction<T> {
    pub fn new(actions: impl IntoIterator<Item = BoxedAction<T>>, name: impl Into<String>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
            name: name.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl<T: ?Sized> UndoableAction<T> for CompositeAction<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn execute(&self, target: &mut T) -> anyhow::Result<()> {
        for (done, action) in self.actions.iter().enumerate() {
            if let Err(e) = action.execute(target) {
                // Bereits ausgeführte Teil-Actions zurückrollen: nie teilweise angewendet
                for applied in self.actions[..done].iter().rev() {
                    applied.undo(target)?;
                }
                return Err(e);
            }
        }
        Ok(())
    }

    fn undo(&self, target: &mut T) -> anyhow::Result<()> {
        for (remaining, action) in self.actions.iter().enumerate().rev() {
            if let Err(e) = action.undo(target) {
                for reverted in &self.actions[remaining + 1..] {
                    reverted.execute(target)?;
                }
                return Err(e);
            }
        }
        Ok(())
    }
}

/// Undo/Redo-Verlauf aus bereits ausgeführten Actions.
///
/// `push` führt nichts aus: der Aufrufer hat die Mutation schon angewendet.
pub struct ActionLog<T: ?Sized> {
    undo_stack: Vec<BoxedAction<T>>,
    redo_stack: Vec<BoxedAction<T>>,
    max_depth: usize,
}

impl<T: ?Sized> Default for ActionLog<T> {
    fn default() -> Self {
        Self::new_with_capacity(HISTORY_MAX_DEPTH)
    }
}

impl<T: ?Sized> ActionLog<T> {
    /// Erstellt einen neuen Verlauf mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        let max_depth = max_depth.max(1);
        Self {
            undo_stack: Vec::with_capacity(max_depth),
            redo_stack: Vec::with_capacity(max_depth),
            max_depth,
        }
    }

    /// Hängt eine ausgeführte Action an und verwirft den Redo-Zweig.
    pub fn push(&mut self, action: BoxedAction<T>) {
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(action);
        self.redo_stack.clear();
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Name des nächsten Undo-Schritts.
    pub fn undo_name(&self) -> Option<&str> {
        self.undo_stack.last().map(|a| a.name())
    }

    /// Name des nächsten Redo-Schritts.
    pub fn redo_name(&self) -> Option<&str> {
        self.redo_stack.last().map(|a| a.name())
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// Macht die letzte Action rückgängig. `Ok(false)` wenn nichts zu tun ist.
    ///
    /// Schlägt das Undo fehl, bleibt die Action auf dem Undo-Stack.
    pub fn undo(&mut self, target: &mut T) -> anyhow::Result<bool> {
        let Some(action) = self.undo_stack.pop() else {
            return Ok(false);
        };
        if let Err(e) = action.undo(target) {
            self.undo_stack.push(action);
            return Err(e);
        }
        if self.redo_stack.len() >= self.max_depth {
            self.redo_stack.remove(0);
        }
        self.redo_stack.push(action);
        Ok(true)
    }

    /// Wendet die zuletzt rückgängig gemachte Action erneut an.
    pub fn redo(&mut self, target: &mut T) -> anyhow::Result<bool> {
        let Some(action) = self.redo_stack.pop() else {
            return Ok(false);
        };
        if let Err(e) = action.execute(target) {
            self.redo_stack.push(action);
            return Err(e);
        }
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(action);
        Ok(true)
    }

    /// Verwirft den gesamten Verlauf.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
