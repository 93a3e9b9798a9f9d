//! Projektion zwischen Terrain- und Viewport-Koordinaten.
//!
//! Die Projektion gehört dem Host (Kamera, Zoom); der Editor-Kern ruft sie nur auf.

use crate::core::{TerrainPoint, TerrainPolygon};
use glam::Vec2;

/// Vom Host bereitgestellte Abbildung Terrain ↔ Bildschirm (Pixel).
pub trait Viewport {
    /// Terrain-Punkt → Bildschirmposition.
    fn project(&self, point: TerrainPoint) -> Vec2;
    /// Bildschirmposition → Terrain-Punkt.
    fn unproject(&self, screen: Vec2) -> TerrainPoint;
}

/// Achsen-alignierte Bildschirm-Rechteckauswahl, aus zwei beliebigen Ecken.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    pub min: Vec2,
    pub max: Vec2,
}

impl ScreenRect {
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Quadrat mit Kantenlänge `size` um `center`.
    pub fn centered(center: Vec2, size: f32) -> Self {
        let half = Vec2::splat(size / 2.0);
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Inklusive Rand.
    pub fn contains(&self, point: Vec2) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Terrain-Polygon der vier Ecken (oben-links, oben-rechts, unten-rechts,
    /// unten-links, geschlossen).
    pub fn unproject(&self, viewport: &dyn Viewport) -> TerrainPolygon {
        let p1 = viewport.unproject(self.min);
        TerrainPolygon::new(vec![
            p1,
            viewport.unproject(Vec2::new(self.max.x, self.min.y)),
            viewport.unproject(self.max),
            viewport.unproject(Vec2::new(self.min.x, self.max.y)),
            p1,
        ])
    }
}

/// Skalierte Ansicht: `screen = (terrain - origin) * pixels_per_unit`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledViewport {
    /// Terrain-Punkt an der linken oberen Bildschirmecke
    pub origin: Vec2,
    /// Pixel pro Terrain-Einheit
    pub pixels_per_unit: f32,
}

impl ScaledViewport {
    pub fn new(origin: Vec2, pixels_per_unit: f32) -> Self {
        Self {
            origin,
            pixels_per_unit,
        }
    }

    /// 1 Pixel = 1 Terrain-Einheit, keine Y-Spiegelung.
    pub fn identity() -> Self {
        Self::new(Vec2::ZERO, 1.0)
    }
}

impl Default for ScaledViewport {
    fn default() -> Self {
        Self::identity()
    }
}

impl Viewport for ScaledViewport {
    fn project(&self, point: TerrainPoint) -> Vec2 {
        (point.vector() - self.origin) * self.pixels_per_unit
    }

    fn unproject(&self, screen: Vec2) -> TerrainPoint {
        TerrainPoint::from(screen / self.pixels_per_unit + self.origin)
    }
}
