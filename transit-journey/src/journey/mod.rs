//! Journey aggregation.
//!
//! This module answers: "given a start and end point, which routes, stops
//! and moving vehicles matter for this trip?"
//!
//! The aggregation is a pure function over caller-supplied snapshots. It
//! builds a padded region around the endpoints, keeps the routes passing
//! through it and the vehicles on those routes, and finds the stop nearest
//! to each endpoint. The result is a [`JourneyView`] grouped into layers.

mod aggregate;
mod config;
mod view;


pub use aggregate::{build_journey_view, build_journey_view_with};
pub use config::JourneyConfig;
pub use view::{
    ENDPOINTS_LAYER, JourneyView, Layer, STOPS_LAYER, VEHICLES_LAYER, route_group_key,
};
