//! The layered journey view.
//!
//! A `JourneyView` is the complete, render-agnostic result of one
//! aggregation. Besides plain accessors it exposes the result as named
//! layers so a renderer can draw and toggle each group without knowing how
//! they were derived.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::domain::{BoundingRegion, Point, RouteFeature, RouteId, RouteKey, Vehicle};
use crate::spatial::NearestStopResult;

/// Layer holding the start and end points.
pub const ENDPOINTS_LAYER: &str = "endpoints";

/// Layer holding the nearest stops to each endpoint.
pub const STOPS_LAYER: &str = "stops";

/// Layer holding vehicles on relevant routes.
pub const VEHICLES_LAYER: &str = "vehicles";

/// Group key for a route layer, e.g. `"Route 900: Pulse Highway 2"`.
pub fn route_group_key(key: RouteKey<'_>) -> String {
    format!("Route {}: {}", key.id, key.name)
}

/// Everything relevant to a journey between two points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JourneyView {
    start: Point,
    end: Point,
    region: BoundingRegion,
    relevant_route_ids: BTreeSet<RouteId>,
    relevant_routes: Vec<RouteFeature>,
    relevant_vehicles: Vec<Vehicle>,
    nearest_stop_to_start: Option<NearestStopResult>,
    nearest_stop_to_end: Option<NearestStopResult>,
}

/// One named group of the view.
#[derive(Debug, Clone, PartialEq)]
pub enum Layer<'a> {
    Endpoints { start: Point, end: Point },
    /// Nearest stops, start first. Empty when the inventory was empty.
    Stops(Vec<&'a NearestStopResult>),
    Vehicles(&'a [Vehicle]),
    Route { key: String, route: &'a RouteFeature },
}

impl Layer<'_> {
    /// The layer's stable name.
    pub fn name(&self) -> &str {
        match self {
            Layer::Endpoints { .. } => ENDPOINTS_LAYER,
            Layer::Stops(_) => STOPS_LAYER,
            Layer::Vehicles(_) => VEHICLES_LAYER,
            Layer::Route { key, .. } => key.as_str(),
        }
    }
}

impl JourneyView {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        start: Point,
        end: Point,
        region: BoundingRegion,
        relevant_route_ids: BTreeSet<RouteId>,
        relevant_routes: Vec<RouteFeature>,
        relevant_vehicles: Vec<Vehicle>,
        nearest_stop_to_start: Option<NearestStopResult>,
        nearest_stop_to_end: Option<NearestStopResult>,
    ) -> Self {
        Self {
            start,
            end,
            region,
            relevant_route_ids,
            relevant_routes,
            relevant_vehicles,
            nearest_stop_to_start,
            nearest_stop_to_end,
        }
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    /// The padded region routes were filtered against.
    pub fn region(&self) -> &BoundingRegion {
        &self.region
    }

    pub fn relevant_route_ids(&self) -> &BTreeSet<RouteId> {
        &self.relevant_route_ids
    }

    /// Relevant routes in network order, one per route id.
    pub fn relevant_routes(&self) -> &[RouteFeature] {
        &self.relevant_routes
    }

    /// Vehicles on relevant routes, in snapshot order.
    pub fn relevant_vehicles(&self) -> &[Vehicle] {
        &self.relevant_vehicles
    }

    pub fn nearest_stop_to_start(&self) -> Option<&NearestStopResult> {
        self.nearest_stop_to_start.as_ref()
    }

    pub fn nearest_stop_to_end(&self) -> Option<&NearestStopResult> {
        self.nearest_stop_to_end.as_ref()
    }

    /// Returns true if the route is relevant to this journey.
    pub fn is_relevant(&self, route_id: &RouteId) -> bool {
        self.relevant_route_ids.contains(route_id)
    }

    /// Route groups as `(key, feature)` pairs in `relevant_routes` order.
    pub fn route_groups(&self) -> impl Iterator<Item = (String, &RouteFeature)> {
        // Relevant routes were validated during filtering, so key() succeeds
        self.relevant_routes
            .iter()
            .filter_map(|route| route.key().ok().map(|key| (route_group_key(key), route)))
    }

    /// Look up a route group by its `"Route {id}: {name}"` key.
    pub fn route_group(&self, key: &str) -> Option<&RouteFeature> {
        self.route_groups()
            .find(|(k, _)| k == key)
            .map(|(_, route)| route)
    }

    /// All layers: endpoints, stops, vehicles, then one per relevant route.
    pub fn layers(&self) -> Vec<Layer<'_>> {
        let stops = self
            .nearest_stop_to_start
            .iter()
            .chain(self.nearest_stop_to_end.iter())
            .collect();

        let mut layers = vec![
            Layer::Endpoints {
                start: self.start,
                end: self.end,
            },
            Layer::Stops(stops),
            Layer::Vehicles(&self.relevant_vehicles),
        ];
        layers.extend(
            self.route_groups()
                .map(|(key, route)| Layer::Route { key, route }),
        );
        layers
    }
}
