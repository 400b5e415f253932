//! Journey planning service.
//!
//! Wraps the aggregation engine with data acquisition: concurrent feed
//! fetches with timeouts, a cache for the static feeds, and address
//! resolution against a service area.

mod cache;
mod config;
mod error;
mod plan;


pub use cache::{CacheConfig, FeedCache};
pub use config::{ServiceConfig, durham_service_area};
pub use error::ServiceError;
pub use plan::JourneyService;
