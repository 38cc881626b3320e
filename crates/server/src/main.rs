// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, RawQuery, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use clap::Parser;
use pay_disclosure::{JurisdictionRegistry, LocationRegistry, default_locations, default_registry};
use pay_disclosure_api::{
    ApiError, JurisdictionInfo, ListJurisdictionsResponse, ListLocationsResponse, MatchesResponse,
    check_matches, get_jurisdiction, list_jurisdictions, list_locations,
};
use pay_disclosure_domain::DomainError;
use serde::{Deserialize, Serialize};
use std::path::{Path as FsPath, PathBuf};
use tracing::{error, info};

/// Pay Disclosure Server - HTTP server for the pay disclosure matcher
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to bind the server to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Path to a JSON jurisdiction catalog. If not provided, uses the built-in catalog.
    #[arg(short, long)]
    catalog: Option<PathBuf>,
}

/// Application state shared across handlers.
///
/// The registries are built once and live for the rest of the process,
/// so they are shared by reference without a lock.
#[derive(Clone, Copy)]
struct AppState {
    /// The jurisdiction registry.
    registry: &'static JurisdictionRegistry,
    /// Every selectable location.
    locations: &'static LocationRegistry,
}

impl AppState {
    /// State over the process-wide built-in catalog.
    fn builtin() -> Result<Self, DomainError> {
        Ok(Self {
            registry: default_registry()?,
            locations: default_locations()?,
        })
    }

    /// State over a catalog loaded at startup.
    fn from_registry(registry: JurisdictionRegistry) -> Result<Self, DomainError> {
        let locations: LocationRegistry = LocationRegistry::with_default_placeholders(&registry)?;
        Ok(Self {
            registry: Box::leak(Box::new(registry)),
            locations: Box::leak(Box::new(locations)),
        })
    }
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: err.to_string(),
                }
            }
        }
    }
}

/// Handler for GET /matches endpoint.
///
/// The query string is the shareable form of a fact set.
async fn handle_check_matches(
    AxumState(app_state): AxumState<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Json<MatchesResponse>, HttpError> {
    let query: String = query.unwrap_or_default();
    info!(query = %query, "Handling match request");

    let response: MatchesResponse =
        check_matches(&query, app_state.registry, app_state.locations)?;

    Ok(Json(response))
}

/// Handler for GET /jurisdictions endpoint.
async fn handle_list_jurisdictions(
    AxumState(app_state): AxumState<AppState>,
) -> Json<ListJurisdictionsResponse> {
    info!("Listing jurisdictions");
    Json(list_jurisdictions(app_state.registry))
}

/// Handler for GET /jurisdictions/{id} endpoint.
async fn handle_get_jurisdiction(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
) -> Result<Json<JurisdictionInfo>, HttpError> {
    info!(id = %id, "Getting jurisdiction");

    let info: JurisdictionInfo = get_jurisdiction(app_state.registry, &id)?;

    Ok(Json(info))
}

/// Handler for GET /locations endpoint.
async fn handle_list_locations(
    AxumState(app_state): AxumState<AppState>,
) -> Json<ListLocationsResponse> {
    info!("Listing locations");
    Json(list_locations(app_state.locations))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/matches", get(handle_check_matches))
        .route("/jurisdictions", get(handle_list_jurisdictions))
        .route("/jurisdictions/{id}", get(handle_get_jurisdiction))
        .route("/locations", get(handle_list_locations))
        .with_state(app_state)
}

/// Builds the application state from a catalog file, or over the shared
/// built-in catalog when no path is given.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not a valid catalog, or
/// defines an id more than once.
fn load_app_state(catalog: Option<&FsPath>) -> Result<AppState, Box<dyn std::error::Error>> {
    let app_state: AppState = if let Some(path) = catalog {
        info!("Loading jurisdiction catalog from: {}", path.display());
        let json: String = std::fs::read_to_string(path)?;
        AppState::from_registry(JurisdictionRegistry::from_json_str(&json)?)?
    } else {
        info!("Using built-in jurisdiction catalog");
        AppState::builtin()?
    };
    Ok(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Pay Disclosure Server");

    let app_state: AppState = load_app_state(args.catalog.as_deref())?;
    info!(
        jurisdictions = app_state.registry.len(),
        locations = app_state.locations.len(),
        "Registries ready"
    );

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
