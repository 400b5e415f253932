//! Where feed data and addresses come from.
//!
//! The traits here are the seams between the journey service and the
//! outside world. [`FileFeeds`] serves feeds saved to a directory and
//! [`Gazetteer`] resolves known place names.

mod files;
mod gazetteer;
mod traits;

pub use files::{FileFeeds, ROUTES_FILE, STOPS_FILE, VEHICLES_FILE};
pub use gazetteer::{
    DEFAULT_MAX_SUGGESTIONS, Gazetteer, GazetteerBuilder, MIN_SUGGESTION_QUERY, durham_places,
};
pub use traits::{Geocoder, RouteSource, StopSource, VehicleSource};
