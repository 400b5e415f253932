//! Geographic point type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a coordinate lies outside the valid geographic range.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("invalid coordinate: {axis} {value} is outside [{min}, {max}]")]
pub struct InvalidCoordinate {
    axis: &'static str,
    value: f64,
    min: f64,
    max: f64,
}

impl InvalidCoordinate {
    /// The axis that failed validation ("latitude" or "longitude").
    pub fn axis(&self) -> &'static str {
        self.axis
    }

    /// The rejected value.
    pub fn value(&self) -> f64 {
        self.value
    }
}

/// A validated WGS84 latitude/longitude pair, in degrees.
///
/// Latitude is always within [-90, 90] and longitude within [-180, 180].
/// Non-finite values are rejected.
///
/// # Examples
///
/// ```
/// use transit_journey::domain::Point;
///
/// let oshawa = Point::new(43.8971, -78.8658).unwrap();
/// assert_eq!(oshawa.latitude(), 43.8971);
///
/// assert!(Point::new(91.0, 0.0).is_err());
/// assert!(Point::new(0.0, -180.5).is_err());
/// assert!(Point::new(f64::NAN, 0.0).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPoint")]
pub struct Point {
    latitude: f64,
    longitude: f64,
}

impl Point {
    /// Construct a point, validating both axes.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinate> {
        check_axis("latitude", latitude, 90.0)?;
        check_axis("longitude", longitude, 180.0)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Construct a point from GeoJSON ordering (`[lon, lat]`).
    pub fn from_lon_lat(longitude: f64, latitude: f64) -> Result<Self, InvalidCoordinate> {
        Self::new(latitude, longitude)
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Coordinates in GeoJSON ordering.
    pub fn to_lon_lat(self) -> [f64; 2] {
        [self.longitude, self.latitude]
    }
}

fn check_axis(axis: &'static str, value: f64, limit: f64) -> Result<(), InvalidCoordinate> {
    // NaN fails the range check too
    if (-limit..=limit).contains(&value) {
        Ok(())
    } else {
        Err(InvalidCoordinate {
            axis,
            value,
            min: -limit,
            max: limit,
        })
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({}, {})", self.latitude, self.longitude)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5},{:.5}", self.latitude, self.longitude)
    }
}

#[derive(Deserialize)]
struct RawPoint {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawPoint> for Point {
    type Error = InvalidCoordinate;

    fn try_from(raw: RawPoint) -> Result<Self, Self::Error> {
        Point::new(raw.latitude, raw.longitude)
    }
}
