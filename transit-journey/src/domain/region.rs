//! Axis-aligned lat/lon regions.

use serde::Serialize;

use super::Point;

/// An axis-aligned rectangle in latitude/longitude space.
///
/// `min <= max` holds on both axes by construction. Bounds are not clamped
/// to the valid coordinate range: a padded region may extend past the poles
/// or the antimeridian.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingRegion {
    min_lat: f64,
    max_lat: f64,
    min_lon: f64,
    max_lon: f64,
}

impl BoundingRegion {
    /// The smallest region covering both points.
    pub fn enclosing(a: Point, b: Point) -> Self {
        Self {
            min_lat: a.latitude().min(b.latitude()),
            max_lat: a.latitude().max(b.latitude()),
            min_lon: a.longitude().min(b.longitude()),
            max_lon: a.longitude().max(b.longitude()),
        }
    }

    /// Region from explicit bounds. Swapped bounds are reordered so the
    /// `min <= max` invariant holds.
    pub fn from_bounds(south: f64, north: f64, west: f64, east: f64) -> Self {
        Self {
            min_lat: south.min(north),
            max_lat: south.max(north),
            min_lon: west.min(east),
            max_lon: west.max(east),
        }
    }

    /// A new region grown by `degrees` on every side.
    ///
    /// Negative values are treated as zero so the region never inverts.
    pub fn expanded_by(&self, degrees: f64) -> Self {
        let d = degrees.max(0.0);
        Self {
            min_lat: self.min_lat - d,
            max_lat: self.max_lat + d,
            min_lon: self.min_lon - d,
            max_lon: self.max_lon + d,
        }
    }

    /// Inclusive containment on all four edges.
    pub fn contains(&self, point: &Point) -> bool {
        let (lat, lon) = (point.latitude(), point.longitude());
        self.min_lat <= lat && lat <= self.max_lat && self.min_lon <= lon && lon <= self.max_lon
    }

    pub fn min_lat(&self) -> f64 {
        self.min_lat
    }

    pub fn max_lat(&self) -> f64 {
        self.max_lat
    }

    pub fn min_lon(&self) -> f64 {
        self.min_lon
    }

    pub fn max_lon(&self) -> f64 {
        self.max_lon
    }
}
