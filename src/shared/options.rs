//! Zentrale Konfiguration für den Punkt-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Schwellwerte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use super::input::ModifierKey;
use serde::{Deserialize, Serialize};

// ── Hit-Tests ───────────────────────────────────────────────────────

/// Maximale Distanz (Terrain-Einheiten) für Treffer auf einen Pfad.
pub const PATH_HIT_DISTANCE: f32 = 2.0;
/// Maximale Distanz (Terrain-Einheiten) für Treffer auf eine Einzelpunkt-Collection.
pub const POINT_HIT_DISTANCE: f32 = 2.0;
/// Kantenlänge eines Punkt-Markers in Screen-Pixeln.
pub const MARKER_SIZE_PX: f32 = 12.0;

// ── Selektion ───────────────────────────────────────────────────────

/// Mindestbreite/-höhe (Pixel), ab der ein Aufziehen als Rechteck-Selektion zählt.
pub const BOX_SELECT_MIN_SIZE_PX: f32 = 5.0;

// ── History ─────────────────────────────────────────────────────────

/// Maximale Anzahl Undo-Schritte.
pub const HISTORY_MAX_DEPTH: usize = 200;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `grm_map_edit.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Hit-Tests ───────────────────────────────────────────────
    /// Doppelklick-Einfügen und Rechtsklick-Treffer: `distance < path_hit_distance`
    pub path_hit_distance: f32,
    /// Treffer auf Collections mit genau einem Punkt
    pub point_hit_distance: f32,
    /// Marker-Größe in Pixeln (Treffer innerhalb des Marker-Quadrats)
    pub marker_size_px: f32,

    // ── Selektion ───────────────────────────────────────────────
    /// Mindestgröße der Rechteck-Selektion in Pixeln
    pub box_select_min_size_px: f32,

    // ── Modi ────────────────────────────────────────────────────
    /// Modifier, der bei fokussiertem Endpunkt in den ContinuePath-Modus wechselt
    #[serde(default = "default_continue_path_modifier")]
    pub continue_path_modifier: ModifierKey,

    // ── History ─────────────────────────────────────────────────
    /// Maximale Undo-Tiefe
    #[serde(default = "default_history_max_depth")]
    pub history_max_depth: usize,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            path_hit_distance: PATH_HIT_DISTANCE,
            point_hit_distance: POINT_HIT_DISTANCE,
            marker_size_px: MARKER_SIZE_PX,
            box_select_min_size_px: BOX_SELECT_MIN_SIZE_PX,
            continue_path_modifier: ModifierKey::Control,
            history_max_depth: HISTORY_MAX_DEPTH,
        }
    }
}

/// Serde-Default für `continue_path_modifier` (Abwärtskompatibilität).
fn default_continue_path_modifier() -> ModifierKey {
    ModifierKey::Control
}

/// Serde-Default für `history_max_depth` (Abwärtskompatibilität).
fn default_history_max_depth() -> usize {
    HISTORY_MAX_DEPTH
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("grm_map_edit"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("grm_map_edit.toml")
    }

    /// Halbe Marker-Kantenlänge: Pixel-Toleranz für Punkt-Treffer.
    pub fn marker_half_size(&self) -> f32 {
        self.marker_size_px / 2.0
    }
}
