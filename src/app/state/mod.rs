//! Editor-State
//!
//! - `app_state` — zentraler `EditorState`
//! - `editor` — Modus, Zielmenge und laufende Geste
//! - `selection` — Selektion und Fokus

mod app_state;
mod editor;
mod selection;

pub use app_state::EditorState;
pub use editor::{ActiveGesture, EditMode, EditSessionState, EditTargets};
pub use selection::{SelectionChange, SelectionModel};
