//! Live vehicle telemetry type.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{Point, RouteId};

/// A vehicle position from one telemetry snapshot.
///
/// `route_id` is whatever the telemetry feed reported; it is not required to
/// match any route in the network feed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vehicle {
    pub id: String,
    pub route_id: RouteId,
    pub position: Point,
    /// Speed in metres per second, when the feed reports one.
    pub speed: Option<f64>,
    /// Unix timestamp (seconds) of the position report.
    pub timestamp: i64,
}

impl Vehicle {
    pub fn new(
        id: impl Into<String>,
        route_id: impl Into<RouteId>,
        position: Point,
        speed: Option<f64>,
        timestamp: i64,
    ) -> Self {
        Self {
            id: id.into(),
            route_id: route_id.into(),
            position,
            speed,
            timestamp,
        }
    }

    /// When the position was observed, or `None` if the timestamp is out of
    /// chrono's representable range.
    pub fn observed_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.timestamp, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observed_at_converts_unix_seconds() {
        let position = Point::new(43.8971, -78.8658).unwrap();
        let v = Vehicle::new("vehicle_1", "1", position, Some(25.0), 1_616_343_600);

        let at = v.observed_at().unwrap();
        assert_eq!(at.to_rfc3339(), "2021-03-21T16:20:00+00:00");
    }

    #[test]
    fn observed_at_out_of_range() {
        let position = Point::new(0.0, 0.0).unwrap();
        let v = Vehicle::new("v", "1", position, None, i64::MAX);
        assert!(v.observed_at().is_none());
    }
}
