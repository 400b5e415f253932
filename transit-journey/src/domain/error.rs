//! Domain error types.
//!
//! These errors represent structural problems in the data handed to the
//! engine. They are distinct from feed and I/O errors.

use super::RouteProperty;

/// Errors raised while aggregating a journey view.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JourneyError {
    /// A route feature lacks an identifying property
    #[error("route feature at index {index} is missing required property {property}")]
    MissingRouteProperty {
        /// Position of the feature in the input sequence
        index: usize,
        property: RouteProperty,
    },
}
