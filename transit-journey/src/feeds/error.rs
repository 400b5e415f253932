//! Feed error types.

use std::path::PathBuf;

use crate::domain::InvalidCoordinate;

/// Errors from reading or converting collaborator payloads.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// Reading a payload from disk failed
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The payload is not valid JSON or does not have the expected shape
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The payload is JSON but not a valid GeoJSON feature collection
    #[error("invalid GeoJSON: {0}")]
    GeoJson(#[from] geojson::Error),

    /// A record carries a coordinate outside the valid range
    #[error("record {index}: {source}")]
    InvalidCoordinate {
        index: usize,
        #[source]
        source: InvalidCoordinate,
    },

    /// A feature has a geometry type this feed does not support
    #[error("record {index}: unsupported geometry type {kind}")]
    UnsupportedGeometry { index: usize, kind: String },

    /// A geometry's coordinates do not match its declared type
    #[error("record {index}: malformed geometry: {message}")]
    MalformedGeometry { index: usize, message: String },

    /// A stop feature lacks an identifying property
    #[error("stop record {index} is missing required property {property}")]
    MissingStopProperty {
        index: usize,
        property: &'static str,
    },

    /// A fetch did not complete in time
    #[error("timed out fetching {feed}")]
    Timeout { feed: &'static str },
}
