//! Great-circle distance.

use crate::domain::Point;

/// Mean Earth radius used by the haversine formula, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two points, in kilometres.
///
/// ```
/// use transit_journey::domain::Point;
/// use transit_journey::spatial::distance;
///
/// let p = Point::new(43.9, -78.9).unwrap();
/// assert_eq!(distance(p, p), 0.0);
/// ```
pub fn distance(a: Point, b: Point) -> f64 {
    let lat1 = a.latitude().to_radians();
    let lat2 = b.latitude().to_radians();
    let dlat = lat2 - lat1;
    let dlon = (b.longitude() - a.longitude()).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    // Rounding can push h fractionally above 1 for antipodal points
    let c = 2.0 * h.sqrt().min(1.0).asin();

    EARTH_RADIUS_KM * c
}
