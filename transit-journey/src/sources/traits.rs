//! Collaborator interfaces.
//!
//! These traits describe where the journey service gets its data. The
//! engine itself never calls them; the service fetches everything first and
//! hands the engine finished snapshots. Implementations are free to do
//! network I/O, retries or caching of their own.

use std::future::Future;

use crate::domain::{Point, RouteFeature, Stop, Vehicle};
use crate::feeds::FeedError;

/// Source of live vehicle positions.
pub trait VehicleSource {
    /// Fetch the current telemetry snapshot.
    fn fetch_vehicles(&self) -> impl Future<Output = Result<Vec<Vehicle>, FeedError>> + Send;
}

/// Source of the static route network.
pub trait RouteSource {
    fn fetch_routes(&self) -> impl Future<Output = Result<Vec<RouteFeature>, FeedError>> + Send;
}

/// Source of the static stop inventory.
pub trait StopSource {
    fn fetch_stops(&self) -> impl Future<Output = Result<Vec<Stop>, FeedError>> + Send;
}

/// Address to coordinate resolution.
pub trait Geocoder {
    /// Resolve an address. `Ok(None)` means the address is unknown.
    fn geocode(
        &self,
        address: &str,
    ) -> impl Future<Output = Result<Option<Point>, FeedError>> + Send;
}
