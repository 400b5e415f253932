//! Feed payload parsing.
//!
//! The route network and stop inventory are published as GeoJSON feature
//! collections (ArcGIS open-data exports with upper-case property names);
//! vehicle telemetry arrives as an array of flattened position records.
//! This module turns those payloads into validated domain types.
//!
//! Fetching the payloads is not done here; see [`crate::sources`].

mod convert;
mod error;
mod types;

pub use convert::{parse_route_collection, parse_stop_collection, parse_vehicle_snapshot};
pub use error::FeedError;
pub use types::{FeedId, VehicleRecord};
