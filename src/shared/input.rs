//! Abstrakte Eingabe-Primitive, in die der Host seine Toolkit-Events übersetzt.

use serde::{Deserialize, Serialize};

/// Zustand der Modifier-Tasten zum Zeitpunkt eines Events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        ctrl: false,
        shift: false,
        alt: false,
    };

    pub const CTRL: Self = Self {
        ctrl: true,
        shift: false,
        alt: false,
    };

    pub fn is_none(self) -> bool {
        self == Self::NONE
    }

    /// Genau dieser eine Modifier ist gedrückt.
    pub fn is_only(self, key: ModifierKey) -> bool {
        self == Self::NONE.with(key)
    }

    pub fn contains(self, key: ModifierKey) -> bool {
        match key {
            ModifierKey::Control => self.ctrl,
            ModifierKey::Shift => self.shift,
            ModifierKey::Alt => self.alt,
        }
    }

    pub fn with(mut self, key: ModifierKey) -> Self {
        match key {
            ModifierKey::Control => self.ctrl = true,
            ModifierKey::Shift => self.shift = true,
            ModifierKey::Alt => self.alt = true,
        }
        self
    }
}

/// Einzelne Modifier-Taste (konfigurierbar, daher serialisierbar).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModifierKey {
    Control,
    Shift,
    Alt,
}

/// Für den Editor relevante Tasten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Delete,
    Escape,
    Z,
    Y,
    /// Modifier-Taste selbst (Drücken/Loslassen ändert den Modifier-Zustand)
    Modifier(ModifierKey),
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
}
