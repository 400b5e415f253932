//! Journey view aggregation.
//!
//! Combines the spatial primitives into a single view: which routes pass
//! near the journey, which vehicles are on them, and which stops are
//! closest to each endpoint.

use std::collections::HashSet;

use tracing::debug;

use crate::domain::{JourneyError, Point, RouteFeature, RouteId, Stop, Vehicle};
use crate::spatial::{build_region, filter_routes, nearest};

use super::config::JourneyConfig;
use super::view::JourneyView;

/// Build the journey view for a trip from `start` to `end`.
///
/// Routes are relevant when any point of their geometry lies within the
/// endpoints' bounding box padded by `padding_km`. Vehicles are kept only
/// when their route is relevant. Nearest stops are searched across the
/// whole inventory, not just the padded box.
///
/// A malformed route feature fails the whole call; no partial view is
/// returned.
pub fn build_journey_view(
    start: Point,
    end: Point,
    vehicles: &[Vehicle],
    routes: &[RouteFeature],
    stops: &[Stop],
    padding_km: f64,
) -> Result<JourneyView, JourneyError> {
    let region = build_region(start, end, padding_km);
    let relevant_route_ids = filter_routes(routes, &region)?;

    // First feature per id wins; later duplicates are dropped
    let mut seen: HashSet<&RouteId> = HashSet::new();
    let relevant_routes: Vec<RouteFeature> = routes
        .iter()
        .filter(|route| match &route.route_id {
            Some(id) => relevant_route_ids.contains(id) && seen.insert(id),
            None => false,
        })
        .cloned()
        .collect();

    let relevant_vehicles: Vec<Vehicle> = vehicles
        .iter()
        .filter(|v| relevant_route_ids.contains(&v.route_id))
        .cloned()
        .collect();

    let nearest_stop_to_start = nearest(start, stops);
    let nearest_stop_to_end = nearest(end, stops);

    debug!(
        routes = routes.len(),
        relevant_routes = relevant_routes.len(),
        vehicles = vehicles.len(),
        relevant_vehicles = relevant_vehicles.len(),
        stops = stops.len(),
        "Built journey view"
    );

    Ok(JourneyView::new(
        start,
        end,
        region,
        relevant_route_ids,
        relevant_routes,
        relevant_vehicles,
        nearest_stop_to_start,
        nearest_stop_to_end,
    ))
}

/// Build the journey view using the padding from `config`.
pub fn build_journey_view_with(
    config: &JourneyConfig,
    start: Point,
    end: Point,
    vehicles: &[Vehicle],
    routes: &[RouteFeature],
    stops: &[Stop],
) -> Result<JourneyView, JourneyError> {
    build_journey_view(start, end, vehicles, routes, stops, config.padding_km)
}
