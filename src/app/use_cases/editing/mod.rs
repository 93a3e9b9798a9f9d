//! Use-Case-Funktionen für Punkt-Editing.
//!
//! Aufgeteilt nach Operation:
//! - `insert_point` — Einfügen zwischen Punkten und Verlängern an den Enden
//! - `delete_points` — Löschen (einzeln oder gruppiert)
//! - `drag` — Verschieben mit Vorschau
//! - `split_path` — Pfad teilen

mod delete_points;
mod drag;
mod insert_point;
mod split_path;

pub use delete_points::{delete_point, delete_points};
pub use drag::{begin_drag, end_drag, update_drag};
pub use insert_point::{extend_path, insert_point};
pub use split_path::split_path;
