//! Stop inventory type.

use serde::Serialize;

use super::Point;

/// A stop from the static stop inventory.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stop {
    pub stop_id: String,
    pub name: String,
    pub position: Point,
}

impl Stop {
    pub fn new(stop_id: impl Into<String>, name: impl Into<String>, position: Point) -> Self {
        Self {
            stop_id: stop_id.into(),
            name: name.into(),
            position,
        }
    }
}
