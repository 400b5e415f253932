//! End-to-end journey planning.
//!
//! Fetches the feeds, caches the static ones, and hands the snapshots to
//! the aggregation engine.

use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::domain::{Point, RouteFeature, Stop, Vehicle};
use crate::feeds::FeedError;
use crate::journey::{JourneyView, build_journey_view_with};
use crate::sources::{FileFeeds, Geocoder, RouteSource, StopSource, VehicleSource};

use super::cache::FeedCache;
use super::config::ServiceConfig;
use super::error::ServiceError;

/// Run a fetch, failing with [`FeedError::Timeout`] if it takes too long.
async fn fetch_within<T>(
    feed: &'static str,
    limit: Duration,
    fetch: impl Future<Output = Result<T, FeedError>>,
) -> Result<T, FeedError> {
    tokio::time::timeout(limit, fetch)
        .await
        .map_err(|_| FeedError::Timeout { feed })?
}

/// Journey planner over a set of feed sources.
pub struct JourneyService<V, R, S> {
    vehicles: V,
    routes: R,
    stops: S,
    cache: FeedCache,
    config: ServiceConfig,
}

impl JourneyService<FileFeeds, FileFeeds, FileFeeds> {
    /// Create a service reading every feed from one directory.
    pub fn from_dir(dir: impl Into<PathBuf>, config: ServiceConfig) -> Self {
        let feeds = FileFeeds::new(dir);
        Self::new(feeds.clone(), feeds.clone(), feeds, config)
    }
}

impl<V, R, S> JourneyService<V, R, S>
where
    V: VehicleSource,
    R: RouteSource,
    S: StopSource,
{
    /// Create a new service.
    pub fn new(vehicles: V, routes: R, stops: S, config: ServiceConfig) -> Self {
        let cache = FeedCache::new(&config.cache);
        Self {
            vehicles,
            routes,
            stops,
            cache,
            config,
        }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Plan a journey between two points.
    ///
    /// The three feeds are fetched concurrently. A failed or slow vehicle
    /// fetch degrades to an empty snapshot; a failed route or stop fetch
    /// fails the plan.
    pub async fn plan(&self, start: Point, end: Point) -> Result<JourneyView, ServiceError> {
        let (vehicles, routes, stops) =
            futures::join!(self.live_vehicles(), self.route_network(), self.stop_inventory());
        let routes = routes?;
        let stops = stops?;

        let view = build_journey_view_with(
            &self.config.journey,
            start,
            end,
            &vehicles,
            &routes,
            &stops,
        )?;

        info!(
            %start,
            %end,
            routes = view.relevant_routes().len(),
            vehicles = view.relevant_vehicles().len(),
            "Planned journey"
        );
        Ok(view)
    }

    /// Plan a journey between two addresses.
    ///
    /// Both addresses must resolve, and must fall inside the configured
    /// service area when there is one.
    pub async fn plan_addresses<G: Geocoder>(
        &self,
        geocoder: &G,
        source: &str,
        destination: &str,
    ) -> Result<JourneyView, ServiceError> {
        let start = self.resolve(geocoder, source).await?;
        let end = self.resolve(geocoder, destination).await?;
        self.plan(start, end).await
    }

    /// Drop the cached route network and stop inventory.
    pub fn invalidate_cache(&self) {
        self.cache.invalidate_all();
    }

    async fn resolve<G: Geocoder>(
        &self,
        geocoder: &G,
        address: &str,
    ) -> Result<Point, ServiceError> {
        let point = geocoder
            .geocode(address)
            .await
            .map_err(ServiceError::Geocode)?
            .ok_or_else(|| ServiceError::AddressNotFound(address.to_string()))?;

        if let Some(area) = &self.config.service_area
            && !area.contains(&point)
        {
            return Err(ServiceError::OutsideServiceArea {
                address: address.to_string(),
                point,
            });
        }

        debug!(address, %point, "Resolved address");
        Ok(point)
    }

    async fn live_vehicles(&self) -> Vec<Vehicle> {
        let fetch = self.vehicles.fetch_vehicles();
        match fetch_within("vehicles", self.config.fetch_timeout, fetch).await {
            Ok(vehicles) => vehicles,
            Err(e) => {
                warn!(error = %e, "Vehicle fetch failed, continuing without vehicles");
                Vec::new()
            }
        }
    }

    async fn route_network(&self) -> Result<Arc<Vec<RouteFeature>>, FeedError> {
        if let Some(cached) = self.cache.routes().await {
            return Ok(cached);
        }

        let routes =
            fetch_within("routes", self.config.fetch_timeout, self.routes.fetch_routes()).await?;
        debug!(routes = routes.len(), "Fetched route network");

        let routes = Arc::new(routes);
        self.cache.insert_routes(Arc::clone(&routes)).await;
        Ok(routes)
    }

    async fn stop_inventory(&self) -> Result<Arc<Vec<Stop>>, FeedError> {
        if let Some(cached) = self.cache.stops().await {
            return Ok(cached);
        }

        let stops =
            fetch_within("stops", self.config.fetch_timeout, self.stops.fetch_stops()).await?;
        debug!(stops = stops.len(), "Fetched stop inventory");

        let stops = Arc::new(stops);
        self.cache.insert_stops(Arc::clone(&stops)).await;
        Ok(stops)
    }
}
