use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use transit_journey::domain::Point;
use transit_journey::feeds::FeedError;
use transit_journey::journey::JourneyConfig;
use transit_journey::render::{GeoJsonSink, RenderSink, SummarySink};
use transit_journey::service::{JourneyService, ServiceConfig, ServiceError};
use transit_journey::sources::{DEFAULT_MAX_SUGGESTIONS, Gazetteer, Geocoder, durham_places};

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Show the transit routes, stops and vehicles near a trip",
    long_about = None
)]
struct Args {
    /// Directory holding routes.geojson, stops.geojson and vehicles.json
    #[arg(long, env = "TRANSIT_FEEDS_DIR", default_value = "data")]
    feeds: PathBuf,

    /// Where the trip starts: "lat,lon" or a place name
    #[arg(long)]
    from: String,

    /// Where the trip ends: "lat,lon" or a place name
    #[arg(long)]
    to: String,

    /// Buffer around the trip when selecting routes
    #[arg(long, default_value_t = 1.0)]
    padding_km: f64,

    /// JSON file mapping place names to [lat, lon]. Defaults to built-in Durham places.
    #[arg(long)]
    gazetteer: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Format::Summary)]
    format: Format,

    /// Accept endpoints outside the Durham service area
    #[arg(long)]
    no_service_area: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Summary,
    Geojson,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error("failed to load gazetteer: {0}")]
    Gazetteer(#[from] FeedError),

    #[error("failed to encode output: {0}")]
    Output(#[from] serde_json::Error),
}

/// Parse a `"lat,lon"` literal.
fn parse_lat_lon(s: &str) -> Option<(f64, f64)> {
    let (lat, lon) = s.split_once(',')?;
    Some((lat.trim().parse().ok()?, lon.trim().parse().ok()?))
}

/// Resolves coordinate literals directly and everything else by name.
struct EndpointResolver {
    places: Gazetteer,
}

impl Geocoder for EndpointResolver {
    async fn geocode(&self, address: &str) -> Result<Option<Point>, FeedError> {
        match parse_lat_lon(address) {
            Some((lat, lon)) => Point::new(lat, lon)
                .map(Some)
                .map_err(|source| FeedError::InvalidCoordinate { index: 0, source }),
            None => {
                let point = self.places.geocode(address).await?;
                if point.is_none() {
                    let suggestions = self.places.suggest(address, DEFAULT_MAX_SUGGESTIONS);
                    if !suggestions.is_empty() {
                        warn!(address, ?suggestions, "Unknown place, did you mean one of these?");
                    }
                }
                Ok(point)
            }
        }
    }
}

async fn run(args: Args) -> Result<String, CliError> {
    let places = match &args.gazetteer {
        Some(path) => Gazetteer::load(path).await?,
        None => durham_places(),
    };
    let resolver = EndpointResolver { places };

    let mut config = ServiceConfig {
        journey: JourneyConfig::new(args.padding_km),
        ..ServiceConfig::default()
    };
    if args.no_service_area {
        config.service_area = None;
    }

    info!(feeds = %args.feeds.display(), "Planning journey");
    let service = JourneyService::from_dir(&args.feeds, config);
    let view = service.plan_addresses(&resolver, &args.from, &args.to).await?;

    let output = match args.format {
        Format::Summary => SummarySink.render(&view),
        Format::Geojson => serde_json::to_string_pretty(&GeoJsonSink::default().render(&view))?,
    };
    Ok(output)
}

#[tokio::main]
async fn main() -> ExitCode {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(args).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Journey planning failed");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lat_lon_literals() {
        assert_eq!(parse_lat_lon("43.8971,-78.8658"), Some((43.8971, -78.8658)));
        assert_eq!(parse_lat_lon(" 43.9 , -78.9 "), Some((43.9, -78.9)));
        assert_eq!(parse_lat_lon("Oshawa GO"), None);
        assert_eq!(parse_lat_lon("Simcoe, King"), None);
    }

    #[tokio::test]
    async fn resolver_prefers_coordinates() {
        let resolver = EndpointResolver {
            places: durham_places(),
        };

        let p = resolver.geocode("43.9,-78.9").await.unwrap();
        assert_eq!(p, Some(Point::new(43.9, -78.9).unwrap()));

        assert!(resolver.geocode("oshawa go").await.unwrap().is_some());
        assert!(resolver.geocode("Atlantis").await.unwrap().is_none());
        assert!(resolver.geocode("Oshawa").await.unwrap().is_none());
        assert!(matches!(
            resolver.geocode("95.0,0.0").await,
            Err(FeedError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn parse_args() {
        let args = Args::try_parse_from([
            "transit-journey",
            "--feeds",
            "/tmp/feeds",
            "--from",
            "Oshawa GO",
            "--to",
            "43.9,-78.9",
            "--format",
            "geojson",
            "--no-service-area",
        ])
        .unwrap();

        assert_eq!(args.feeds, PathBuf::from("/tmp/feeds"));
        assert_eq!(args.from, "Oshawa GO");
        assert_eq!(args.padding_km, 1.0);
        assert_eq!(args.format, Format::Geojson);
        assert!(args.no_service_area);
        assert!(args.gazetteer.is_none());
    }

    #[test]
    fn from_and_to_are_required() {
        assert!(Args::try_parse_from(["transit-journey", "--from", "Oshawa GO"]).is_err());
    }

    #[tokio::test]
    async fn run_against_feed_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("routes.geojson"),
            r#"{"type": "FeatureCollection", "features": [
                {"type": "Feature",
                 "properties": {"ROUTE_ID": "900", "ROUTE_NAME": "Pulse Highway 2"},
                 "geometry": {"type": "LineString",
                              "coordinates": [[-78.87, 43.899], [-78.85, 43.901]]}}]}"#,
        )
        .unwrap();
        std::fs::write(
            dir.path().join("stops.geojson"),
            r#"{"type": "FeatureCollection", "features": []}"#,
        )
        .unwrap();

        let args = Args::try_parse_from([
            "transit-journey",
            "--feeds",
            dir.path().to_str().unwrap(),
            "--from",
            "Downtown Oshawa",
            "--to",
            "Oshawa Centre",
        ])
        .unwrap();

        let output = run(args).await.unwrap();
        assert!(output.contains("Route 900: Pulse Highway 2"));
    }
}
