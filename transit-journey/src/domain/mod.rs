//! Domain types for journey aggregation.
//!
//! This module contains the value types the engine works over: points,
//! vehicles, stops, route features and regions. Points validate their
//! coordinates at construction time, so code that receives a `Point` can
//! trust it is in range.

mod error;
mod point;
mod region;
mod route;
mod stop;
mod vehicle;

pub use error::JourneyError;
pub use point::{InvalidCoordinate, Point};
pub use region::BoundingRegion;
pub use route::{RouteFeature, RouteId, RouteKey, RouteProperty};
pub use stop::Stop;
pub use vehicle::Vehicle;
