//! Conversion from feed payloads to domain types.
//!
//! GeoJSON positions are `[lon, lat, ...]`; extra ordinates such as
//! elevation are ignored. Every coordinate goes through `Point::new`, so
//! out-of-range values are rejected here rather than deep in aggregation.
//!
//! Route features with missing `ROUTE_ID` / `ROUTE_NAME` are passed through
//! with `None` properties: whether that is fatal is decided by the engine,
//! which reports the feature's index.

use geojson::{Feature, FeatureCollection, JsonObject, Value};
use serde_json::Value as JsonValue;
use tracing::{debug, warn};

use crate::domain::{Point, RouteFeature, RouteId, Stop, Vehicle};

use super::error::FeedError;
use super::types::{FeedId, VehicleRecord};

/// Parse a feature collection. A document without `features` is empty.
fn parse_features(json: &str) -> Result<Vec<Feature>, FeedError> {
    let object: JsonObject = serde_json::from_str(json)?;
    if !object.contains_key("features") {
        return Ok(Vec::new());
    }
    let collection = FeatureCollection::try_from(object)?;
    Ok(collection.features)
}

/// Parse a route network GeoJSON document.
pub fn parse_route_collection(json: &str) -> Result<Vec<RouteFeature>, FeedError> {
    let routes = parse_features(json)?
        .iter()
        .enumerate()
        .map(|(index, feature)| convert_route(index, feature))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(routes = routes.len(), "Parsed route network");
    Ok(routes)
}

/// Parse a stop inventory GeoJSON document.
pub fn parse_stop_collection(json: &str) -> Result<Vec<Stop>, FeedError> {
    let stops = parse_features(json)?
        .iter()
        .enumerate()
        .map(|(index, feature)| convert_stop(index, feature))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(stops = stops.len(), "Parsed stop inventory");
    Ok(stops)
}

/// Parse a vehicle telemetry snapshot (a JSON array of vehicle records).
///
/// Records that cannot be converted are logged and skipped so one bad
/// position does not hide the rest of the fleet. Only a payload that is
/// not a JSON array fails.
pub fn parse_vehicle_snapshot(json: &str) -> Result<Vec<Vehicle>, FeedError> {
    let records: Vec<JsonValue> = serde_json::from_str(json)?;
    let total = records.len();
    let mut vehicles = Vec::with_capacity(total);

    for (index, record) in records.into_iter().enumerate() {
        let id = record["id"].as_str().unwrap_or_default().to_string();
        match convert_vehicle(index, record) {
            Ok(vehicle) => vehicles.push(vehicle),
            Err(e) => warn!(index, id = %id, error = %e, "Skipping vehicle record"),
        }
    }

    debug!(
        vehicles = vehicles.len(),
        skipped = total - vehicles.len(),
        "Parsed vehicle snapshot"
    );
    Ok(vehicles)
}

fn convert_route(index: usize, feature: &Feature) -> Result<RouteFeature, FeedError> {
    let route_id = feature
        .property("ROUTE_ID")
        .and_then(FeedId::from_property)
        .map(|id| RouteId::from(id.into_string()));
    let route_name = feature
        .property("ROUTE_NAME")
        .and_then(JsonValue::as_str)
        .map(str::to_string);
    let geometry = match &feature.geometry {
        Some(geometry) => line_parts(index, &geometry.value)?,
        None => Vec::new(),
    };

    Ok(RouteFeature {
        route_id,
        route_name,
        geometry,
    })
}

fn convert_stop(index: usize, feature: &Feature) -> Result<Stop, FeedError> {
    let stop_id = feature
        .property("STOP_ID")
        .and_then(FeedId::from_property)
        .ok_or(FeedError::MissingStopProperty {
            index,
            property: "STOP_ID",
        })?;
    let name = feature
        .property("STOP_NAME")
        .and_then(JsonValue::as_str)
        .ok_or(FeedError::MissingStopProperty {
            index,
            property: "STOP_NAME",
        })?;

    let geometry = feature
        .geometry
        .as_ref()
        .ok_or_else(|| FeedError::MalformedGeometry {
            index,
            message: "stop has no geometry".to_string(),
        })?;
    let position = match &geometry.value {
        Value::Point(position) => point(index, position)?,
        other => {
            return Err(FeedError::UnsupportedGeometry {
                index,
                kind: other.type_name().to_string(),
            });
        }
    };

    Ok(Stop::new(stop_id.into_string(), name, position))
}

fn convert_vehicle(index: usize, record: JsonValue) -> Result<Vehicle, FeedError> {
    let record: VehicleRecord = serde_json::from_value(record)?;
    let position = Point::new(record.latitude, record.longitude)
        .map_err(|source| FeedError::InvalidCoordinate { index, source })?;
    let route_id = record
        .route_id
        .map(FeedId::into_string)
        .unwrap_or_default();

    Ok(Vehicle::new(
        record.id,
        route_id,
        position,
        record.speed,
        record.timestamp,
    ))
}

/// Split a line geometry into parts of points.
fn line_parts(index: usize, value: &Value) -> Result<Vec<Vec<Point>>, FeedError> {
    match value {
        Value::LineString(line) => Ok(vec![line_points(index, line)?]),
        Value::MultiLineString(lines) => lines
            .iter()
            .map(|line| line_points(index, line))
            .collect(),
        other => Err(FeedError::UnsupportedGeometry {
            index,
            kind: other.type_name().to_string(),
        }),
    }
}

fn line_points(index: usize, line: &[Vec<f64>]) -> Result<Vec<Point>, FeedError> {
    line.iter().map(|position| point(index, position)).collect()
}

fn point(index: usize, position: &[f64]) -> Result<Point, FeedError> {
    match position {
        [lon, lat, ..] => Point::from_lon_lat(*lon, *lat)
            .map_err(|source| FeedError::InvalidCoordinate { index, source }),
        _ => Err(FeedError::MalformedGeometry {
            index,
            message: format!("position has {} ordinates, need at least 2", position.len()),
        }),
    }
}
