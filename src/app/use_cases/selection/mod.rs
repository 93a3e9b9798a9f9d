//! Use-Case-Funktionen für Punkt-Selektion.
//!
//! - `rect` — Rechteck-Selektion (Drag auf freier Fläche)
//! - `helpers` — Fokus, Aufheben, Alles selektieren

mod helpers;
mod rect;

pub use helpers::{clear_selection, focus_first_selected, focus_point, select_all};
pub use rect::select_points_in_rect;
