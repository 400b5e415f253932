//! Service configuration.

use std::time::Duration;

use crate::domain::BoundingRegion;
use crate::journey::JourneyConfig;

use super::cache::CacheConfig;

/// The Durham Region transit service area.
pub fn durham_service_area() -> BoundingRegion {
    BoundingRegion::from_bounds(43.7429, 44.3341, -79.2647, -78.5226)
}

/// Configuration for the journey service.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Aggregation parameters.
    pub journey: JourneyConfig,

    /// Time allowed for each feed fetch.
    pub fetch_timeout: Duration,

    /// Addresses resolving outside this region are rejected.
    /// `None` accepts anywhere.
    pub service_area: Option<BoundingRegion>,

    /// Static feed cache settings.
    pub cache: CacheConfig,
}

impl ServiceConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        journey: JourneyConfig,
        fetch_timeout: Duration,
        service_area: Option<BoundingRegion>,
        cache: CacheConfig,
    ) -> Self {
        Self {
            journey,
            fetch_timeout,
            service_area,
            cache,
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            journey: JourneyConfig::default(),
            fetch_timeout: Duration::from_secs(30),
            service_area: Some(durham_service_area()),
            cache: CacheConfig::default(),
        }
    }
}
