//! Rendering journey views.
//!
//! The engine never draws anything. A [`RenderSink`] takes a finished
//! [`JourneyView`] and turns it into some output: a GeoJSON document for
//! map clients, or a text summary for the terminal.

mod geojson_sink;
mod style;
mod summary;

use crate::journey::JourneyView;

pub use geojson_sink::GeoJsonSink;
pub use style::{LayerStyles, MarkerStyle, RouteStyle, journey_route_style};
pub use summary::SummarySink;

/// A consumer of journey views.
pub trait RenderSink {
    type Output;

    fn render(&self, view: &JourneyView) -> Self::Output;
}
