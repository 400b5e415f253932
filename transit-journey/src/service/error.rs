//! Service error types.

use crate::domain::{JourneyError, Point};
use crate::feeds::FeedError;

/// Errors from planning a journey end to end.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// A static feed could not be fetched
    #[error("feed error: {0}")]
    Feed(#[from] FeedError),

    /// The fetched data could not be aggregated
    #[error(transparent)]
    Journey(#[from] JourneyError),

    /// The geocoder failed
    #[error("geocoding failed: {0}")]
    Geocode(#[source] FeedError),

    /// The geocoder does not know the address
    #[error("address not found: {0}")]
    AddressNotFound(String),

    /// The address resolved outside the service area
    #[error("{address} ({point}) is outside the service area")]
    OutsideServiceArea { address: String, point: Point },
}
