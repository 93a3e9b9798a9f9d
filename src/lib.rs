//! Interaktiver Punkt-Editor für Pfade und Polygone auf einer Terrain-Karte.
//! Kern-Funktionalität als Library exportiert; der Host liefert Eingaben und Projektion.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    EditMode, EditorCommand, EditorController, EditorHost, EditorIntent, EditorState,
    InputOutcome, NullHost,
};
pub use core::{
    CollectionId, EditError, EditablePointCollection, PointCollectionCapabilities,
    PointCollectionSet, PointRef, TerrainPath, TerrainPoint, TerrainPolygon,
};
pub use shared::{EditorOptions, Key, ModifierKey, Modifiers, PointerButton, ScaledViewport, Viewport};
