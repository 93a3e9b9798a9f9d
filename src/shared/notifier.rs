//! Typisierte Beobachter-Liste für Änderungs-Benachrichtigungen.
//!
//! Ersetzt ein Framework-Property-System: jede mutierbare Einheit hält einen
//! `ChangeNotifier<E>` und ruft nach jeder Mutation `notify` auf. Die Render-Schicht
//! registriert sich per `subscribe`.

use std::fmt;

/// Handle einer Registrierung, wird zum Abmelden benötigt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener<E> = Box<dyn FnMut(&E)>;

/// Liste von Callbacks für Events vom Typ `E`.
pub struct ChangeNotifier<E> {
    listeners: Vec<(SubscriptionId, Listener<E>)>,
    next_id: u64,
}

impl<E> Default for ChangeNotifier<E> {
    fn default() -> Self {
        Self {
            listeners: Vec::new(),
            next_id: 0,
        }
    }
}

impl<E> fmt::Debug for ChangeNotifier<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl<E> ChangeNotifier<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registriert einen Callback. Wird synchron bei jeder Änderung aufgerufen.
    pub fn subscribe(&mut self, listener: impl FnMut(&E) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Meldet einen Callback ab. Gibt `false` zurück, wenn die ID unbekannt ist.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    /// Benachrichtigt alle Listener in Registrierungsreihenfolge.
    pub fn notify(&mut self, event: &E) {
        for (_, listener) in &mut self.listeners {
            listener(event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}
