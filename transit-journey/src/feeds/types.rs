//! Feed payload DTOs.
//!
//! The route network and stop inventory are parsed with the `geojson`
//! crate; their properties are read as raw JSON values. Vehicle telemetry
//! is a plain array of records, typed here. The records use `Option` and
//! `#[serde(default)]` liberally because the upstream publishers omit
//! fields rather than sending nulls.

use serde::Deserialize;
use serde_json::Value as JsonValue;

/// An identifier that may be published as a string or a number.
///
/// ArcGIS exports frequently emit integer ids, sometimes as floats.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FeedId {
    Text(String),
    Number(serde_json::Number),
}

impl FeedId {
    /// Read an id from a feature property. Anything other than a string or
    /// a number counts as absent.
    pub fn from_property(value: &JsonValue) -> Option<Self> {
        match value {
            JsonValue::String(s) => Some(FeedId::Text(s.clone())),
            JsonValue::Number(n) => Some(FeedId::Number(n.clone())),
            _ => None,
        }
    }

    /// The id as text. Integral floats lose their fraction, so `900.0`
    /// becomes `"900"` and matches a vehicle reporting route `"900"`.
    pub fn into_string(self) -> String {
        match self {
            FeedId::Text(s) => s,
            FeedId::Number(n) => match n.as_f64() {
                Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => {
                    (f as i64).to_string()
                }
                _ => n.to_string(),
            },
        }
    }
}

/// One vehicle from a telemetry snapshot.
#[derive(Debug, Clone, Deserialize)]
pub struct VehicleRecord {
    pub id: String,

    /// Absent when the vehicle is not assigned to a trip.
    #[serde(default)]
    pub route_id: Option<FeedId>,

    pub latitude: f64,
    pub longitude: f64,

    #[serde(default)]
    pub speed: Option<f64>,

    /// Unix seconds; zero when the feed omits it.
    #[serde(default)]
    pub timestamp: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_id_accepts_strings_and_numbers() {
        let text: FeedId = serde_json::from_str(r#""901""#).unwrap();
        assert_eq!(text.into_string(), "901");

        let number: FeedId = serde_json::from_str("901").unwrap();
        assert_eq!(number.into_string(), "901");
    }

    #[test]
    fn integral_float_ids_drop_fraction() {
        let id: FeedId = serde_json::from_str("900.0").unwrap();
        assert_eq!(id.into_string(), "900");

        let id: FeedId = serde_json::from_str("-3.0").unwrap();
        assert_eq!(id.into_string(), "-3");

        let id: FeedId = serde_json::from_str("900.5").unwrap();
        assert_eq!(id.into_string(), "900.5");
    }

    #[test]
    fn property_ids() {
        let id = FeedId::from_property(&serde_json::json!("A12")).unwrap();
        assert_eq!(id.into_string(), "A12");

        let id = FeedId::from_property(&serde_json::json!(93)).unwrap();
        assert_eq!(id.into_string(), "93");

        assert!(FeedId::from_property(&JsonValue::Null).is_none());
        assert!(FeedId::from_property(&serde_json::json!(true)).is_none());
    }

    #[test]
    fn vehicle_record_defaults() {
        let v: VehicleRecord =
            serde_json::from_str(r#"{"id": "8101", "latitude": 43.9, "longitude": -78.9}"#)
                .unwrap();
        assert_eq!(v.route_id, None);
        assert_eq!(v.speed, None);
        assert_eq!(v.timestamp, 0);
    }

    #[test]
    fn vehicle_record_numeric_route() {
        let v: VehicleRecord = serde_json::from_str(
            r#"{"id": "8101", "route_id": 900, "latitude": 43.9, "longitude": -78.9}"#,
        )
        .unwrap();
        assert_eq!(v.route_id.map(FeedId::into_string).as_deref(), Some("900"));
    }
}
