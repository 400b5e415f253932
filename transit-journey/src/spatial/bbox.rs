//! Padded journey regions.

use crate::domain::{BoundingRegion, Point};

/// Kilometres per degree used to convert padding into degrees.
///
/// Applied to both axes, so the padding in longitude is narrower on the
/// ground than in latitude away from the equator.
pub const KM_PER_DEGREE: f64 = 111.0;

/// Padding applied around journey endpoints when none is specified.
pub const DEFAULT_PADDING_KM: f64 = 1.0;

/// Build the region covering `a` and `b`, padded by `padding_km` on each side.
pub fn build_region(a: Point, b: Point, padding_km: f64) -> BoundingRegion {
    BoundingRegion::enclosing(a, b).expanded_by(padding_km / KM_PER_DEGREE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn pt(lat: f64, lon: f64) -> Point {
        Point::new(lat, lon).unwrap()
    }

    #[test]
    fn padding_is_uniform_in_degrees() {
        let r = build_region(pt(43.90, -78.90), pt(43.95, -78.80), DEFAULT_PADDING_KM);
        let pad = 1.0 / 111.0;

        assert_relative_eq!(r.min_lat(), 43.90 - pad);
        assert_relative_eq!(r.max_lat(), 43.95 + pad);
        assert_relative_eq!(r.min_lon(), -78.90 - pad);
        assert_relative_eq!(r.max_lon(), -78.80 + pad);
    }

    #[test]
    fn zero_padding_is_the_enclosing_box() {
        let a = pt(43.95, -78.80);
        let b = pt(43.90, -78.90);
        assert_eq!(build_region(a, b, 0.0), BoundingRegion::enclosing(a, b));
    }

    #[test]
    fn identical_endpoints() {
        let p = pt(43.9, -78.9);
        let r = build_region(p, p, 2.0);
        assert!(r.contains(&p));
        assert!(r.min_lat() < r.max_lat());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn point() -> impl Strategy<Value = Point> {
        (-90.0f64..=90.0, -180.0f64..=180.0).prop_map(|(lat, lon)| Point::new(lat, lon).unwrap())
    }

    proptest! {
        #[test]
        fn ordered_and_covers_endpoints(a in point(), b in point(), padding in 0.0f64..50.0) {
            let r = build_region(a, b, padding);
            prop_assert!(r.min_lat() <= r.max_lat());
            prop_assert!(r.min_lon() <= r.max_lon());
            prop_assert!(r.contains(&a));
            prop_assert!(r.contains(&b));

            // The unpadded extent lies inside too
            let inner = BoundingRegion::enclosing(a, b);
            prop_assert!(r.min_lat() <= inner.min_lat() && inner.max_lat() <= r.max_lat());
            prop_assert!(r.min_lon() <= inner.min_lon() && inner.max_lon() <= r.max_lon());
        }
    }
}
