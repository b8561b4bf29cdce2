#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the hazard map risk engine.
//!
//! Serves point risk assessments, the fault catalogue, and the region
//! statistics table as JSON, plus the county boundary file itself under
//! `/data` for map clients. Boundaries are loaded once at startup from the
//! path in [`ServerConfig`]; the server refuses to start without them.

mod handlers;
pub mod interactive;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};
use hazard_map_risk::{Assessment, NearestFault, RiskEngine};
use hazard_map_server_models::{ApiAssessment, ApiNearestFault};
use hazard_map_spatial::RegionBoundaries;

/// Default location of the county boundary `GeoJSON`.
pub const DEFAULT_BOUNDARIES_PATH: &str = "data/california-counties.geojson";

/// Shared application state.
pub struct AppState {
    /// Risk engine over the embedded reference data.
    pub engine: RiskEngine<'static>,
    /// County boundaries, loaded once at startup.
    pub boundaries: Arc<RegionBoundaries>,
}

impl AppState {
    /// Creates state over the embedded reference data.
    #[must_use]
    pub fn new(boundaries: RegionBoundaries) -> Self {
        Self {
            engine: RiskEngine::embedded(),
            boundaries: Arc::new(boundaries),
        }
    }
}

/// Default bind address.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1";

/// Default listen port.
pub const DEFAULT_PORT: u16 = 8080;

/// Where the server listens and which boundary file it loads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind to.
    pub bind_addr: String,
    /// Port to listen on.
    pub port: u16,
    /// County boundary `GeoJSON` path.
    pub boundaries: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            port: DEFAULT_PORT,
            boundaries: PathBuf::from(DEFAULT_BOUNDARIES_PATH),
        }
    }
}

impl ServerConfig {
    /// Reads `BIND_ADDR`, `PORT`, and `HAZARD_MAP_BOUNDARIES`, falling back
    /// to the defaults for anything unset or unparseable.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            bind_addr: lookup("BIND_ADDR").unwrap_or(defaults.bind_addr),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            boundaries: lookup("HAZARD_MAP_BOUNDARIES").map_or(defaults.boundaries, PathBuf::from),
        }
    }

    /// Directory served under `/data`: the boundary file's parent.
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.boundaries
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf()
    }
}

/// Registers the `/api` routes. Shared by the server and handler tests.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(handlers::health))
            .route("/risk", web::get().to(handlers::risk))
            .route("/faults", web::get().to(handlers::faults))
            .route("/regions", web::get().to(handlers::regions)),
    );
}

/// Converts a nearest-fault result into its API form.
#[must_use]
pub fn to_api_nearest_fault(nearest: &NearestFault<'_>) -> ApiNearestFault {
    ApiNearestFault {
        name: nearest.fault.name().to_string(),
        distance_miles: nearest.distance_miles,
        closest_point: [nearest.closest.longitude, nearest.closest.latitude],
        probability: nearest.fault.probability().to_string(),
        slip_rate: nearest.fault.slip_rate().to_string(),
        significance: nearest.fault.significance(),
    }
}

/// Converts an engine assessment into the `/api/risk` response body.
#[must_use]
pub fn to_api_assessment(assessment: Assessment<'_>) -> ApiAssessment {
    ApiAssessment {
        nearest_fault: assessment.nearest_fault.as_ref().map(to_api_nearest_fault),
        risk: assessment.risk,
        mitigation_plan: assessment.plan,
        coverage_gaps: assessment
            .coverage_gaps
            .into_iter()
            .map(ToString::to_string)
            .collect(),
    }
}

/// Starts the hazard map API server with configuration from the
/// environment.
///
/// See [`ServerConfig::from_env`] and [`run_server_with`].
///
/// # Errors
///
/// Returns an `std::io::Result` error if the server fails to start.
#[allow(clippy::future_not_send)]
pub async fn run_server() -> std::io::Result<()> {
    run_server_with(ServerConfig::from_env()).await
}

/// Starts the hazard map API server.
///
/// Loads the county boundaries and starts the Actix-Web HTTP server. This
/// is a regular async function; the caller provides the async runtime
/// (e.g. via `#[actix_web::main]`).
///
/// # Errors
///
/// Returns an `std::io::Result` error if the boundary file cannot be
/// loaded, or if the HTTP server fails to bind or encounters a runtime
/// error.
#[allow(clippy::future_not_send)]
pub async fn run_server_with(config: ServerConfig) -> std::io::Result<()> {
    let boundaries = RegionBoundaries::from_path(&config.boundaries).map_err(|e| {
        log::error!(
            "Failed to load boundaries from {}: {e}",
            config.boundaries.display()
        );
        std::io::Error::other(e)
    })?;

    let engine = RiskEngine::embedded();
    log::info!(
        "Reference data ready: {} regions, {} faults",
        engine.reference().regions().len(),
        engine.reference().faults().len()
    );

    let state = web::Data::new(AppState::new(boundaries));
    let data_dir = config.data_dir();
    let ServerConfig {
        bind_addr, port, ..
    } = config;

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(configure_api)
            // Serve boundary data for map overlays
            .service(Files::new("/data", data_dir.clone()))
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
