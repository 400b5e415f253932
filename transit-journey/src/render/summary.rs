//! Plain-text journey summary for terminals.

use crate::journey::{JourneyView, Layer};
use crate::spatial::NearestStopResult;

use super::RenderSink;

/// Renders a journey view as a short human-readable report.
#[derive(Debug, Clone, Copy, Default)]
pub struct SummarySink;

fn describe_stop(label: &str, result: Option<&NearestStopResult>) -> String {
    match result {
        Some(r) => format!(
            "{label}: {} {} ({:.2} km)",
            r.stop.stop_id, r.stop.name, r.distance_km
        ),
        None => format!("{label}: none"),
    }
}

impl RenderSink for SummarySink {
    type Output = String;

    fn render(&self, view: &JourneyView) -> String {
        let region = view.region();
        let mut lines = vec![
            format!("Journey {} -> {}", view.start(), view.end()),
            format!(
                "Search area: lat {:.5}..{:.5}, lon {:.5}..{:.5}",
                region.min_lat(),
                region.max_lat(),
                region.min_lon(),
                region.max_lon()
            ),
            describe_stop("Nearest stop to start", view.nearest_stop_to_start()),
            describe_stop("Nearest stop to end", view.nearest_stop_to_end()),
        ];

        let routes: Vec<String> = view
            .layers()
            .into_iter()
            .filter_map(|layer| match layer {
                Layer::Route { key, .. } => Some(key),
                _ => None,
            })
            .collect();
        lines.push(format!("Routes ({}):", routes.len()));
        lines.extend(routes.into_iter().map(|key| format!("  {key}")));

        lines.push(format!("Vehicles ({}):", view.relevant_vehicles().len()));
        lines.extend(view.relevant_vehicles().iter().map(|v| {
            let speed = v
                .speed
                .map(|s| format!(", {s:.1} m/s"))
                .unwrap_or_default();
            format!("  {} on route {} at {}{speed}", v.id, v.route_id, v.position)
        }));

        lines.join("\n")
    }
}
