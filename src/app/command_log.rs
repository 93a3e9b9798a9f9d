//! Begrenzter Verlauf ausgeführter Commands für Diagnose und Tests.

use super::EditorCommand;
use std::collections::VecDeque;

/// Obergrenze, danach fällt der jeweils älteste Eintrag heraus.
const CAPACITY: usize = 1000;

/// Ausgeführte Commands als Debug-Text, älteste zuerst.
///
/// Zeiger-Updates (Drag, Rechteck, Vorschau-Cursor) werden nicht mitgeschrieben.
#[derive(Debug, Default)]
pub struct CommandLog {
    entries: VecDeque<String>,
}

impl CommandLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, command: &EditorCommand) {
        if command.is_pointer_update() {
            return;
        }
        if self.entries.len() == CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(format!("{command:?}"));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}
