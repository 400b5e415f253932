//! GeoJSON output.
//!
//! Flattens a journey view into a single feature collection. Each feature
//! names its layer in a `layer` property so a map client can group and
//! toggle them. Coordinates are `[lon, lat]` as GeoJSON requires.

use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use serde_json::json;

use crate::domain::{Point, RouteFeature, Vehicle};
use crate::journey::{ENDPOINTS_LAYER, JourneyView, Layer, STOPS_LAYER, VEHICLES_LAYER};
use crate::spatial::NearestStopResult;

use super::RenderSink;
use super::style::{LayerStyles, MarkerStyle};

/// Renders a journey view as a GeoJSON `FeatureCollection`.
#[derive(Debug, Clone, Default)]
pub struct GeoJsonSink {
    styles: LayerStyles,
}

impl GeoJsonSink {
    pub fn new(styles: LayerStyles) -> Self {
        Self { styles }
    }

    fn endpoint(&self, role: &str, position: Point) -> Feature {
        let MarkerStyle { color, radius } = self.styles.endpoint;
        let mut properties = JsonObject::new();
        properties.insert("layer".to_string(), json!(ENDPOINTS_LAYER));
        properties.insert("role".to_string(), json!(role));
        properties.insert("color".to_string(), json!(color));
        properties.insert("radius".to_string(), json!(radius));
        feature(point_value(position), properties)
    }

    fn stop(&self, near: &str, result: &NearestStopResult) -> Feature {
        let MarkerStyle { color, radius } = self.styles.stop;
        let mut properties = JsonObject::new();
        properties.insert("layer".to_string(), json!(STOPS_LAYER));
        properties.insert("near".to_string(), json!(near));
        properties.insert("stop_id".to_string(), json!(result.stop.stop_id));
        properties.insert("stop_name".to_string(), json!(result.stop.name));
        properties.insert("distance_km".to_string(), json!(result.distance_km));
        properties.insert("color".to_string(), json!(color));
        properties.insert("radius".to_string(), json!(radius));
        feature(point_value(result.stop.position), properties)
    }

    fn vehicle(&self, vehicle: &Vehicle) -> Feature {
        let MarkerStyle { color, radius } = self.styles.vehicle;
        let observed_at = vehicle.observed_at().map(|t| t.to_rfc3339());
        let mut properties = JsonObject::new();
        properties.insert("layer".to_string(), json!(VEHICLES_LAYER));
        properties.insert("vehicle_id".to_string(), json!(vehicle.id));
        properties.insert("route_id".to_string(), json!(vehicle.route_id));
        properties.insert("speed".to_string(), json!(vehicle.speed));
        properties.insert("timestamp".to_string(), json!(vehicle.timestamp));
        properties.insert("observed_at".to_string(), json!(observed_at));
        properties.insert("color".to_string(), json!(color));
        properties.insert("radius".to_string(), json!(radius));
        feature(point_value(vehicle.position), properties)
    }

    fn route(&self, key: &str, route: &RouteFeature) -> Feature {
        let style = (self.styles.route)(route);
        let lines = route
            .geometry
            .iter()
            .map(|line| line.iter().map(|p| p.to_lon_lat().to_vec()).collect())
            .collect();

        let mut properties = JsonObject::new();
        properties.insert("layer".to_string(), json!(key));
        properties.insert("ROUTE_ID".to_string(), json!(route.route_id));
        properties.insert("ROUTE_NAME".to_string(), json!(route.route_name));
        properties.insert("color".to_string(), json!(style.color));
        properties.insert("weight".to_string(), json!(style.weight));
        properties.insert("opacity".to_string(), json!(style.opacity));
        feature(Value::MultiLineString(lines), properties)
    }
}

fn point_value(position: Point) -> Value {
    Value::Point(position.to_lon_lat().to_vec())
}

fn feature(value: Value, properties: JsonObject) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(Geometry::new(value)),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

impl RenderSink for GeoJsonSink {
    type Output = FeatureCollection;

    fn render(&self, view: &JourneyView) -> FeatureCollection {
        let mut features = Vec::new();

        for layer in view.layers() {
            match layer {
                Layer::Endpoints { start, end } => {
                    features.push(self.endpoint("start", start));
                    features.push(self.endpoint("end", end));
                }
                Layer::Stops(_) => {
                    // Roles are taken from the view so a lone stop keeps its end
                    if let Some(stop) = view.nearest_stop_to_start() {
                        features.push(self.stop("start", stop));
                    }
                    if let Some(stop) = view.nearest_stop_to_end() {
                        features.push(self.stop("end", stop));
                    }
                }
                Layer::Vehicles(vehicles) => {
                    features.extend(vehicles.iter().map(|v| self.vehicle(v)));
                }
                Layer::Route { key, route } => features.push(self.route(&key, route)),
            }
        }

        FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Stop;
    use crate::journey::build_journey_view;
    use crate::render::{MarkerStyle, RouteStyle};

    fn pt(lat: f64, lon: f64) -> Point {
        Point::new(lat, lon).unwrap()
    }

    fn sample_view() -> JourneyView {
        let routes = vec![
            RouteFeature::new(
                "900",
                "Pulse Highway 2",
                vec![vec![pt(43.92, -78.85), pt(43.93, -78.84)], vec![pt(43.94, -78.83)]],
            ),
            RouteFeature::new("405", "Uxbridge", vec![vec![pt(44.10, -79.12)]]),
        ];
        let vehicles = vec![
            Vehicle::new("8101", "900", pt(43.925, -78.845), Some(12.5), 1_616_343_600),
            Vehicle::new("8102", "405", pt(44.10, -79.12), None, 0),
        ];
        let stops = vec![Stop::new("93", "Simcoe / King", pt(43.90, -78.90))];

        build_journey_view(pt(43.90, -78.90), pt(43.95, -78.80), &vehicles, &routes, &stops, 1.0)
            .unwrap()
    }

    fn render_json(sink: &GeoJsonSink, view: &JourneyView) -> serde_json::Value {
        serde_json::to_value(sink.render(view)).unwrap()
    }

    fn features_in<'a>(
        output: &'a serde_json::Value,
        layer: &str,
    ) -> Vec<&'a serde_json::Value> {
        output["features"]
            .as_array()
            .unwrap()
            .iter()
            .filter(|f| f["properties"]["layer"] == layer)
            .collect()
    }

    #[test]
    fn one_feature_per_item() {
        let output = render_json(&GeoJsonSink::default(), &sample_view());

        assert_eq!(output["type"], "FeatureCollection");
        assert!(matches!(
            output.to_string().parse::<geojson::GeoJson>(),
            Ok(geojson::GeoJson::FeatureCollection(_))
        ));
        // 2 endpoints, 2 stops, 1 vehicle, 1 route
        assert_eq!(output["features"].as_array().unwrap().len(), 6);
        assert_eq!(features_in(&output, ENDPOINTS_LAYER).len(), 2);
        assert_eq!(features_in(&output, STOPS_LAYER).len(), 2);
        assert_eq!(features_in(&output, VEHICLES_LAYER).len(), 1);
        assert_eq!(features_in(&output, "Route 900: Pulse Highway 2").len(), 1);
    }

    #[test]
    fn endpoints_are_lon_lat() {
        let output = render_json(&GeoJsonSink::default(), &sample_view());
        let endpoints = features_in(&output, ENDPOINTS_LAYER);

        assert_eq!(endpoints[0]["properties"]["role"], "start");
        assert_eq!(endpoints[0]["geometry"]["coordinates"], json!([-78.90, 43.90]));
        assert_eq!(endpoints[1]["properties"]["role"], "end");
        assert_eq!(endpoints[1]["properties"]["color"], "red");
    }

    #[test]
    fn route_feature_properties() {
        let output = render_json(&GeoJsonSink::default(), &sample_view());
        let route = features_in(&output, "Route 900: Pulse Highway 2")[0];

        assert_eq!(route["geometry"]["type"], "MultiLineString");
        assert_eq!(
            route["geometry"]["coordinates"],
            json!([[[-78.85, 43.92], [-78.84, 43.93]], [[-78.83, 43.94]]])
        );
        assert_eq!(route["properties"]["ROUTE_ID"], "900");
        assert_eq!(route["properties"]["ROUTE_NAME"], "Pulse Highway 2");
        assert_eq!(route["properties"]["color"], "purple");
        assert_eq!(route["properties"]["weight"], 3);
    }

    #[test]
    fn vehicle_and_stop_properties() {
        let output = render_json(&GeoJsonSink::default(), &sample_view());

        let vehicle = features_in(&output, VEHICLES_LAYER)[0];
        assert_eq!(vehicle["properties"]["vehicle_id"], "8101");
        assert_eq!(vehicle["properties"]["route_id"], "900");
        assert_eq!(vehicle["properties"]["speed"], 12.5);
        assert_eq!(vehicle["properties"]["timestamp"], 1_616_343_600);
        assert_eq!(
            vehicle["properties"]["observed_at"],
            "2021-03-21T16:20:00+00:00"
        );

        let stops = features_in(&output, STOPS_LAYER);
        assert_eq!(stops[0]["properties"]["near"], "start");
        assert_eq!(stops[0]["properties"]["stop_id"], "93");
        assert_eq!(stops[0]["properties"]["stop_name"], "Simcoe / King");
        assert_eq!(stops[0]["properties"]["distance_km"], 0.0);
        assert_eq!(stops[1]["properties"]["near"], "end");
    }

    #[test]
    fn custom_styles_apply() {
        fn thick(_: &RouteFeature) -> RouteStyle {
            RouteStyle {
                color: "black",
                weight: 9,
                opacity: 1.0,
            }
        }
        let sink = GeoJsonSink::new(LayerStyles {
            route: thick,
            vehicle: MarkerStyle {
                color: "yellow",
                radius: 4,
            },
            ..LayerStyles::default()
        });

        let output = render_json(&sink, &sample_view());
        let route = features_in(&output, "Route 900: Pulse Highway 2")[0];
        assert_eq!(route["properties"]["color"], "black");
        assert_eq!(route["properties"]["weight"], 9);
        let vehicle = features_in(&output, VEHICLES_LAYER)[0];
        assert_eq!(vehicle["properties"]["color"], "yellow");
    }

    #[test]
    fn empty_inventory_has_no_stop_features() {
        let view = build_journey_view(pt(43.90, -78.90), pt(43.95, -78.80), &[], &[], &[], 1.0)
            .unwrap();
        let output = render_json(&GeoJsonSink::default(), &view);

        assert_eq!(output["features"].as_array().unwrap().len(), 2);
        assert!(features_in(&output, STOPS_LAYER).is_empty());
    }
}
