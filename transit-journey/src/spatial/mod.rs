//! Spatial primitives: distance, nearest stop, padded regions and route
//! relevance.
//!
//! Everything here is a pure function over its arguments. Distances use the
//! haversine formula on a spherical Earth; regions are plain lat/lon boxes.

mod bbox;
mod distance;
mod nearest;
mod relevance;

pub use bbox::{DEFAULT_PADDING_KM, KM_PER_DEGREE, build_region};
pub use distance::{EARTH_RADIUS_KM, distance};
pub use nearest::{NearestStopResult, nearest};
pub use relevance::{filter_routes, route_keys};
