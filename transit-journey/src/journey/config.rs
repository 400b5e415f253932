//! Aggregation configuration.

use crate::spatial::DEFAULT_PADDING_KM;

/// Configuration parameters for building journey views.
#[derive(Debug, Clone, PartialEq)]
pub struct JourneyConfig {
    /// Buffer around the journey endpoints (kilometres).
    /// Routes with a point inside the padded box are relevant.
    pub padding_km: f64,
}

impl JourneyConfig {
    /// Create a new configuration with the given padding.
    pub fn new(padding_km: f64) -> Self {
        Self { padding_km }
    }
}

impl Default for JourneyConfig {
    fn default() -> Self {
        Self {
            padding_km: DEFAULT_PADDING_KM,
        }
    }
}
