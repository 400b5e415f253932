//! Place name lookup.
//!
//! A gazetteer resolves well-known place names to coordinates without a
//! geocoding service. Names match case-insensitively, ignoring surrounding
//! whitespace.

use std::collections::HashMap;
use std::path::Path;

use crate::domain::{BoundingRegion, Point};
use crate::feeds::FeedError;

use super::traits::Geocoder;

/// Queries shorter than this get no suggestions.
pub const MIN_SUGGESTION_QUERY: usize = 3;

/// Suggestions offered when the caller has no preference.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;

#[derive(Debug, Clone)]
struct Place {
    name: String,
    position: Point,
}

/// A table of named places.
#[derive(Debug, Clone, Default)]
pub struct Gazetteer {
    /// Keyed by normalised name.
    places: HashMap<String, Place>,
}

fn normalise(name: &str) -> String {
    name.trim().to_lowercase()
}

impl Gazetteer {
    /// Create an empty gazetteer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a place.
    pub fn insert(&mut self, name: &str, position: Point) {
        let place = Place {
            name: name.trim().to_string(),
            position,
        };
        self.places.insert(normalise(name), place);
    }

    /// Look up a place by name.
    pub fn get(&self, name: &str) -> Option<Point> {
        self.places.get(&normalise(name)).map(|place| place.position)
    }

    /// Place names containing `query`, for completing a partly typed address.
    ///
    /// Matching ignores case. Names starting with the query come first, then
    /// the rest; each group is sorted by name. At most `max_results` names
    /// are returned, and none at all for queries under
    /// [`MIN_SUGGESTION_QUERY`] characters.
    ///
    /// ```
    /// use transit_journey::sources::durham_places;
    ///
    /// let names = durham_places().suggest("go", 5);
    /// assert!(names.is_empty());
    ///
    /// let names = durham_places().suggest("osh", 2);
    /// assert_eq!(names, ["Oshawa Centre", "Oshawa GO"]);
    /// ```
    pub fn suggest(&self, query: &str, max_results: usize) -> Vec<String> {
        self.matching(query, max_results, None)
    }

    /// Like [`Gazetteer::suggest`], keeping only places inside `area`.
    pub fn suggest_within(
        &self,
        query: &str,
        max_results: usize,
        area: &BoundingRegion,
    ) -> Vec<String> {
        self.matching(query, max_results, Some(area))
    }

    fn matching(
        &self,
        query: &str,
        max_results: usize,
        area: Option<&BoundingRegion>,
    ) -> Vec<String> {
        let query = normalise(query);
        if query.chars().count() < MIN_SUGGESTION_QUERY {
            return Vec::new();
        }

        let mut matches: Vec<(bool, &str, &Place)> = self
            .places
            .iter()
            .filter(|(key, _)| key.contains(&query))
            .filter(|(_, place)| area.is_none_or(|area| area.contains(&place.position)))
            .map(|(key, place)| (!key.starts_with(&query), key.as_str(), place))
            .collect();
        matches.sort_unstable_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));

        matches
            .into_iter()
            .take(max_results)
            .map(|(_, _, place)| place.name.clone())
            .collect()
    }

    /// Returns the number of places.
    pub fn len(&self) -> usize {
        self.places.len()
    }

    /// Returns true if there are no places.
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// Parse a JSON object mapping names to `[lat, lon]` pairs.
    ///
    /// ```
    /// use transit_journey::sources::Gazetteer;
    ///
    /// let g = Gazetteer::from_json(r#"{"Oshawa GO": [43.8707, -78.8853]}"#).unwrap();
    /// assert!(g.get("oshawa go").is_some());
    /// ```
    pub fn from_json(json: &str) -> Result<Self, FeedError> {
        let object: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)?;
        let entries: Vec<(String, [f64; 2])> = object
            .into_iter()
            .map(|(name, value)| serde_json::from_value(value).map(|pair| (name, pair)))
            .collect::<Result<_, _>>()?;

        let mut gazetteer = Self::new();
        for (index, (name, [lat, lon])) in entries.into_iter().enumerate() {
            let position = Point::new(lat, lon)
                .map_err(|source| FeedError::InvalidCoordinate { index, source })?;
            gazetteer.insert(&name, position);
        }
        Ok(gazetteer)
    }

    /// Load a gazetteer file (see [`Gazetteer::from_json`]).
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, FeedError> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| FeedError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_json(&json)
    }
}

impl Geocoder for Gazetteer {
    async fn geocode(&self, address: &str) -> Result<Option<Point>, FeedError> {
        Ok(self.get(address))
    }
}

/// Builder for creating a gazetteer.
///
/// Provides a fluent API for adding places.
#[derive(Debug, Default)]
pub struct GazetteerBuilder {
    inner: Gazetteer,
}

impl GazetteerBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a place. Invalid coordinates are skipped.
    pub fn add(mut self, name: &str, latitude: f64, longitude: f64) -> Self {
        if let Ok(position) = Point::new(latitude, longitude) {
            self.inner.insert(name, position);
        }
        self
    }

    /// Build the gazetteer.
    pub fn build(self) -> Gazetteer {
        self.inner
    }
}

/// A default set of Durham Region places.
///
/// Positions are approximate station entrances and landmarks.
pub fn durham_places() -> Gazetteer {
    GazetteerBuilder::new()
        .add("Downtown Oshawa", 43.8971, -78.8658) // Simcoe St / King St
        .add("Oshawa Centre", 43.8887, -78.8808)
        .add("Oshawa GO", 43.8707, -78.8853)
        .add("Whitby GO", 43.8653, -78.9378)
        .add("Ajax GO", 43.8480, -79.0413)
        .add("Pickering GO", 43.8312, -79.0856)
        .add("Ontario Tech University", 43.9450, -78.8965)
        .build()
}
