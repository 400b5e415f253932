//! File-backed feed sources.
//!
//! Loads feed payloads saved to a directory and serves them as if they
//! were live responses. Useful for offline runs and for tests.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::{RouteFeature, Stop, Vehicle};
use crate::feeds::{
    FeedError, parse_route_collection, parse_stop_collection, parse_vehicle_snapshot,
};

use super::traits::{RouteSource, StopSource, VehicleSource};

/// Vehicle snapshot file name within a feed directory.
pub const VEHICLES_FILE: &str = "vehicles.json";

/// Route network file name within a feed directory.
pub const ROUTES_FILE: &str = "routes.geojson";

/// Stop inventory file name within a feed directory.
pub const STOPS_FILE: &str = "stops.geojson";

/// Feed sources that read payloads from a directory.
///
/// Expects `routes.geojson` and `stops.geojson`. `vehicles.json` is
/// optional: without it the telemetry snapshot is empty.
///
/// Files are re-read on every fetch, so replacing a file updates the next
/// fetch.
#[derive(Debug, Clone)]
pub struct FileFeeds {
    dir: PathBuf,
}

impl FileFeeds {
    /// Create sources reading from `dir`. The directory is not checked
    /// until the first fetch.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Read a file from the feed directory; `None` if it does not exist.
    async fn read_optional(&self, name: &str) -> Result<Option<String>, FeedError> {
        let path = self.dir.join(name);
        match tokio::fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(FeedError::Io { path, source }),
        }
    }

    async fn read_required(&self, name: &str) -> Result<String, FeedError> {
        let path = self.dir.join(name);
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| FeedError::Io { path, source })
    }
}

impl VehicleSource for FileFeeds {
    async fn fetch_vehicles(&self) -> Result<Vec<Vehicle>, FeedError> {
        match self.read_optional(VEHICLES_FILE).await? {
            Some(json) => parse_vehicle_snapshot(&json),
            None => {
                debug!(dir = %self.dir.display(), "No vehicle snapshot, using empty");
                Ok(Vec::new())
            }
        }
    }
}

impl RouteSource for FileFeeds {
    async fn fetch_routes(&self) -> Result<Vec<RouteFeature>, FeedError> {
        let json = self.read_required(ROUTES_FILE).await?;
        parse_route_collection(&json)
    }
}

impl StopSource for FileFeeds {
    async fn fetch_stops(&self) -> Result<Vec<Stop>, FeedError> {
        let json = self.read_required(STOPS_FILE).await?;
        parse_stop_collection(&json)
    }
}
