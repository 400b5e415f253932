//! Route relevance filtering.
//!
//! A route is relevant to a journey when any point of its geometry falls
//! inside the journey's padded region. Only vertices are tested: a segment
//! that crosses the region without a vertex inside it does not count.

use std::collections::BTreeSet;

use crate::domain::{BoundingRegion, JourneyError, RouteFeature, RouteId, RouteKey};

/// Validate the identity of every route feature.
///
/// Returns one key per feature, in input order, or the first feature that
/// is missing a property. Nothing is returned for the valid prefix when a
/// later feature fails.
pub fn route_keys(routes: &[RouteFeature]) -> Result<Vec<RouteKey<'_>>, JourneyError> {
    routes
        .iter()
        .enumerate()
        .map(|(index, route)| {
            route
                .key()
                .map_err(|property| JourneyError::MissingRouteProperty { index, property })
        })
        .collect()
}

/// Ids of the routes with at least one point inside `region`.
///
/// Bounds are inclusive. Features sharing an id count once; a feature with
/// no points is never relevant. Every feature is validated before any
/// geometry is examined, so a malformed feature fails the whole call.
pub fn filter_routes(
    routes: &[RouteFeature],
    region: &BoundingRegion,
) -> Result<BTreeSet<RouteId>, JourneyError> {
    let keys = route_keys(routes)?;
    let mut relevant = BTreeSet::new();

    for (route, key) in routes.iter().zip(keys) {
        if relevant.contains(key.id) {
            continue;
        }
        // any() stops at the first point inside
        if route.points().any(|p| region.contains(p)) {
            relevant.insert(key.id.clone());
        }
    }

    Ok(relevant)
}
