//! Geometrie-Kern: Terrain-Punkte, offene Pfade und geschlossene Polygone.
//!
//! Alle Distanzen liegen in derselben Einheit wie die Koordinaten (Terrain-Meter).
//! Schwellwerte für Hit-Tests werden vom Aufrufer übergeben (siehe `EditorOptions`).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Unveränderliche 2D-Koordinate in Welteinheiten. Gleichheit über die Koordinaten.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TerrainPoint(Vec2);

impl TerrainPoint {
    /// Erstellt einen Punkt aus X/Y-Koordinaten.
    pub const fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }

    pub fn x(self) -> f32 {
        self.0.x
    }

    pub fn y(self) -> f32 {
        self.0.y
    }

    /// Koordinaten als Vektor.
    pub fn vector(self) -> Vec2 {
        self.0
    }

    /// Euklidische Distanz zu einem anderen Punkt.
    pub fn distance(self, other: TerrainPoint) -> f32 {
        self.0.distance(other.0)
    }
}

impl From<Vec2> for TerrainPoint {
    fn from(value: Vec2) -> Self {
        Self(value)
    }
}

impl From<TerrainPoint> for Vec2 {
    fn from(value: TerrainPoint) -> Self {
        value.0
    }
}

/// Kürzeste Distanz eines Punktes zum Segment `[a, b]`.
pub(crate) fn segment_distance(point: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return point.distance(a);
    }
    let t = ((point - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    point.distance(a + ab * t)
}

/// Read-only Sicht auf eine geordnete, offene Punktfolge.
#[derive(Debug, Clone, Copy)]
pub struct TerrainPath<'a> {
    points: &'a [TerrainPoint],
}

impl<'a> TerrainPath<'a> {
    pub fn new(points: &'a [TerrainPoint]) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &'a [TerrainPoint] {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Minimale Distanz von `point` zu einem Segment des Pfades.
    ///
    /// Einzelpunkt-Pfad: Distanz zu diesem Punkt. Leerer Pfad: `f32::INFINITY`,
    /// der Aufrufer muss vorher auf `is_empty()` prüfen.
    pub fn distance(&self, point: TerrainPoint) -> f32 {
        match self.points {
            [] => f32::INFINITY,
            [single] => single.distance(point),
            points => points
                .windows(2)
                .map(|w| segment_distance(point.vector(), w[0].vector(), w[1].vector()))
                .fold(f32::INFINITY, f32::min),
        }
    }

    /// Index `i` des Segments `[i, i+1]`, das `point` am nächsten liegt.
    ///
    /// Bei Gleichstand gewinnt der kleinste Index. Ein neuer Punkt gehört an `i + 1`.
    /// Einzelpunkt-Pfad liefert `Some(0)`, leerer Pfad `None`.
    pub fn nearest_segment_index(&self, point: TerrainPoint) -> Option<usize> {
        match self.points {
            [] => None,
            [_] => Some(0),
            points => {
                let mut best = (0, f32::INFINITY);
                for (index, w) in points.windows(2).enumerate() {
                    let d = segment_distance(point.vector(), w[0].vector(), w[1].vector());
                    if d < best.1 {
                        best = (index, d);
                    }
                }
                Some(best.0)
            }
        }
    }
}

/// Geschlossener Punktring für Enthaltensein-Tests.
///
/// Erster und letzter Punkt dürfen identisch sein, der Ring wird aber auch
/// implizit geschlossen.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TerrainPolygon {
    points: Vec<TerrainPoint>,
}

impl TerrainPolygon {
    pub fn new(points: Vec<TerrainPoint>) -> Self {
        Self { points }
    }

    /// Achsen-aligniertes Rechteck aus zwei Ecken (geschlossen, 5 Punkte).
    pub fn from_corners(a: TerrainPoint, b: TerrainPoint) -> Self {
        let (min, max) = (a.vector().min(b.vector()), a.vector().max(b.vector()));
        let p1 = TerrainPoint::new(min.x, min.y);
        Self::new(vec![
            p1,
            TerrainPoint::new(max.x, min.y),
            TerrainPoint::new(max.x, max.y),
            TerrainPoint::new(min.x, max.y),
            p1,
        ])
    }

    pub fn points(&self) -> &[TerrainPoint] {
        &self.points
    }

    /// Even-Odd-Test per Ray-Casting. Punkte auf dem Rand gelten als enthalten.
    pub fn contains(&self, point: TerrainPoint) -> bool {
        if self.points.len() < 3 {
            return false;
        }

        let p = point.vector();
        let mut inside = false;
        let mut previous = self.points[self.points.len() - 1].vector();

        for current in self.points.iter().map(|pt| pt.vector()) {
            if point_on_segment(p, previous, current) {
                return true;
            }

            if (current.y > p.y) != (previous.y > p.y) {
                let x_cross =
                    (previous.x - current.x) * (p.y - current.y) / (previous.y - current.y)
                        + current.x;
                if p.x < x_cross {
                    inside = !inside;
                }
            }

            previous = current;
        }

        inside
    }
}

/// Prüft ob ein Punkt auf einem Liniensegment liegt.
fn point_on_segment(point: Vec2, a: Vec2, b: Vec2) -> bool {
    let ab = b - a;
    let ap = point - a;
    // Geschlossene Ringe wiederholen den ersten Punkt: Segment der Länge 0
    if ab.length_squared() <= f32::EPSILON {
        return ap.length_squared() <= f32::EPSILON;
    }
    if ab.perp_dot(ap).abs() > 1e-4 {
        return false;
    }
    let dot = ap.dot(ab);
    dot >= 0.0 && dot <= ab.length_squared()
}
