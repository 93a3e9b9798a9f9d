//! Core-Domänentypen: Terrain-Geometrie, editierbare Punkt-Collections und deren Arena.

pub mod collection_set;
pub mod error;
/// Geometrie-Kern
///
/// - `TerrainPoint`: unveränderliche 2D-Koordinate
/// - `TerrainPath`: offene Punktfolge (Distanz, nächstes Segment)
/// - `TerrainPolygon`: geschlossener Ring (Enthaltensein)
pub mod geometry;
pub mod point_collection;

pub use collection_set::{CollectionId, CollectionSetChange, PointCollectionSet, PointRef};
pub use error::EditError;
pub use geometry::{TerrainPath, TerrainPoint, TerrainPolygon};
pub use point_collection::{CollectionChange, EditablePointCollection, PointCollectionCapabilities};
