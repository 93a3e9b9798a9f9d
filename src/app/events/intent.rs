use crate::app::context_menu::ContextActionId;
use crate::app::state::EditMode;
use crate::core::PointRef;
use crate::shared::{Key, Modifiers, PointerButton};
use glam::Vec2;

/// Editor-Intents: abstrahierte Eingaben des Hosts ohne Mutationslogik.
///
/// Screen-Positionen sind Pixel im Koordinatensystem des Viewports.
/// `modifiers` beschreibt den Zustand *nach* dem Event: beim Drücken der
/// Modifier-Taste ist er gesetzt, beim Loslassen nicht mehr.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorIntent {
    /// Maustaste gedrückt (`click_count` 2 = Doppelklick)
    PointerPressed {
        button: PointerButton,
        screen_pos: Vec2,
        click_count: u8,
        modifiers: Modifiers,
    },
    /// Zeiger bewegt
    PointerMoved {
        screen_pos: Vec2,
        primary_down: bool,
        modifiers: Modifiers,
    },
    /// Maustaste losgelassen
    PointerReleased {
        button: PointerButton,
        screen_pos: Vec2,
        modifiers: Modifiers,
    },
    KeyPressed {
        key: Key,
        modifiers: Modifiers,
    },
    KeyReleased {
        key: Key,
        modifiers: Modifiers,
    },
    /// Modus von außen setzen (Toolbar)
    EditModeRequested { mode: EditMode },
    /// Pfad ab einem Endpunkt weiterzeichnen (von außen oder Kontextmenü)
    ContinuePathRequested { point: PointRef },
    /// Eintrag eines Punkt-Kontextmenüs gewählt
    ContextActionChosen {
        action: ContextActionId,
        point: PointRef,
    },
    UndoRequested,
    RedoRequested,
    /// Punkt-Selektion aufheben
    ClearSelectionRequested,
    /// Alle Punkte der aktiven Ziele selektieren
    SelectAllRequested,
}
