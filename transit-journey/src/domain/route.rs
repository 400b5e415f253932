//! Route network types.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Point;

/// Identifier of a transit route, as published by the route network feed.
///
/// Route ids are opaque strings. Vehicles reference routes by the same id.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteId(String);

impl RouteId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RouteId({})", self.0)
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RouteId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for RouteId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A route geometry from the network feed.
///
/// The identifying properties are optional because the upstream feed is
/// loosely typed GeoJSON; a feature may arrive without them. They are
/// checked when routes are filtered (see [`RouteFeature::key`]).
///
/// The geometry is a list of parts, each an ordered line of points, so both
/// single and multi-part lines are represented the same way.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteFeature {
    pub route_id: Option<RouteId>,
    pub route_name: Option<String>,
    pub geometry: Vec<Vec<Point>>,
}

/// Which identifying property a route feature is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteProperty {
    RouteId,
    RouteName,
}

impl RouteProperty {
    /// The property name as it appears in the network feed.
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteProperty::RouteId => "ROUTE_ID",
            RouteProperty::RouteName => "ROUTE_NAME",
        }
    }
}

impl fmt::Display for RouteProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Borrowed, validated identity of a route feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteKey<'a> {
    pub id: &'a RouteId,
    pub name: &'a str,
}

impl RouteFeature {
    /// Create a fully identified route feature.
    pub fn new(
        route_id: impl Into<RouteId>,
        route_name: impl Into<String>,
        geometry: Vec<Vec<Point>>,
    ) -> Self {
        Self {
            route_id: Some(route_id.into()),
            route_name: Some(route_name.into()),
            geometry,
        }
    }

    /// The feature's id and name, or the first property that is missing.
    ///
    /// `route_id` is checked before `route_name`.
    pub fn key(&self) -> Result<RouteKey<'_>, RouteProperty> {
        let id = self.route_id.as_ref().ok_or(RouteProperty::RouteId)?;
        let name = self.route_name.as_deref().ok_or(RouteProperty::RouteName)?;
        Ok(RouteKey { id, name })
    }

    /// Iterate over every point in every part of the geometry.
    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.geometry.iter().flatten()
    }

    /// Returns true if the geometry has no points at all.
    pub fn is_empty(&self) -> bool {
        self.points().next().is_none()
    }
}
