//! Layer styling.
//!
//! Styles are plain data. Route styling is a function of the feature so a
//! renderer can colour routes individually.

use serde::Serialize;

use crate::domain::RouteFeature;

/// How to draw a route line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RouteStyle {
    pub color: &'static str,
    pub weight: u32,
    pub opacity: f64,
}

/// How to draw a point marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarkerStyle {
    pub color: &'static str,
    pub radius: u32,
}

/// The default style for journey routes.
pub fn journey_route_style(_route: &RouteFeature) -> RouteStyle {
    RouteStyle {
        color: "purple",
        weight: 3,
        opacity: 0.8,
    }
}

/// Styles for every layer of a journey view.
#[derive(Debug, Clone, Copy)]
pub struct LayerStyles {
    pub route: fn(&RouteFeature) -> RouteStyle,
    pub vehicle: MarkerStyle,
    pub stop: MarkerStyle,
    pub endpoint: MarkerStyle,
}

impl Default for LayerStyles {
    fn default() -> Self {
        Self {
            route: journey_route_style,
            vehicle: MarkerStyle {
                color: "blue",
                radius: 8,
            },
            stop: MarkerStyle {
                color: "green",
                radius: 6,
            },
            endpoint: MarkerStyle {
                color: "red",
                radius: 6,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Point;

    #[test]
    fn default_styles() {
        let styles = LayerStyles::default();
        let route = RouteFeature::new("900", "Pulse", vec![vec![Point::new(43.9, -78.9).unwrap()]]);

        let style = (styles.route)(&route);
        assert_eq!(style.color, "purple");
        assert_eq!(style.weight, 3);
        assert_eq!(style.opacity, 0.8);

        assert_eq!(styles.vehicle, MarkerStyle { color: "blue", radius: 8 });
        assert_eq!(styles.stop, MarkerStyle { color: "green", radius: 6 });
        assert_eq!(styles.endpoint, MarkerStyle { color: "red", radius: 6 });
    }

    #[test]
    fn custom_route_style() {
        fn by_id(route: &RouteFeature) -> RouteStyle {
            let color = match route.route_id.as_ref().map(|id| id.as_str()) {
                Some("900") => "orange",
                _ => "grey",
            };
            RouteStyle {
                color,
                weight: 5,
                opacity: 1.0,
            }
        }

        let styles = LayerStyles {
            route: by_id,
            ..LayerStyles::default()
        };
        let pulse = RouteFeature::new("900", "Pulse", Vec::new());
        let other = RouteFeature::new("405", "Uxbridge", Vec::new());

        assert_eq!((styles.route)(&pulse).color, "orange");
        assert_eq!((styles.route)(&other).color, "grey");
    }
}
