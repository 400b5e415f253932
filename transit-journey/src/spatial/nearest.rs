//! Nearest-stop lookup.

use serde::Serialize;

use crate::domain::{Point, Stop};

use super::distance;

/// The stop closest to a query point, with its distance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearestStopResult {
    pub stop: Stop,
    /// Great-circle distance from the query point, in kilometres. Never negative.
    pub distance_km: f64,
}

/// Find the stop closest to `point`.
///
/// Returns `None` when `stops` is empty. When several stops are exactly
/// equidistant, the one that appears first in `stops` wins.
pub fn nearest(point: Point, stops: &[Stop]) -> Option<NearestStopResult> {
    let mut best: Option<(&Stop, f64)> = None;

    for stop in stops {
        let d = distance(point, stop.position);
        // Strict comparison keeps the earliest of equal candidates
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((stop, d)),
        }
    }

    best.map(|(stop, distance_km)| NearestStopResult {
        stop: stop.clone(),
        distance_km,
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn point() -> impl Strategy<Value = Point> {
        (43.5f64..44.5, -79.5f64..-78.5).prop_map(|(lat, lon)| Point::new(lat, lon).unwrap())
    }

    fn stops() -> impl Strategy<Value = Vec<Stop>> {
        prop::collection::vec(point(), 1..20).prop_map(|points| {
            points
                .into_iter()
                .enumerate()
                .map(|(i, p)| Stop::new(i.to_string(), format!("Stop {i}"), p))
                .collect()
        })
    }

    proptest! {
        /// The result is no farther than any candidate, and is the first
        /// candidate at that distance.
        #[test]
        fn minimal_and_first(query in point(), stops in stops()) {
            let result = nearest(query, &stops).unwrap();

            for s in &stops {
                prop_assert!(result.distance_km <= distance(query, s.position));
            }

            let first_min = stops
                .iter()
                .find(|s| distance(query, s.position) == result.distance_km)
                .unwrap();
            prop_assert_eq!(&result.stop.stop_id, &first_min.stop_id);
        }
    }
}
