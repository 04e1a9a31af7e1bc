//! # Retwall HTTP API Module
//!
//! JSON API for form front-ends, using axum.
//!
//! ## Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /defaults` - Default wall input and profile
//! - `GET /fields` - Field catalogue (names, form aliases, units, defaults)
//! - `POST /evaluate` - Evaluate one wall
//!
//! ## Configuration (Environment Variables)
//!
//! - `RETWALL_CORS_ORIGINS`: Comma-separated list of allowed origins, or "*" for all (default: localhost only)

mod handlers;
mod types;

// Re-export handlers and types for integration tests (via `retwall::api::*`)
pub use handlers::{defaults_handler, evaluate_handler, fields_handler, health_handler};
pub use types::{
    DefaultsResponse, EvaluateRequest, EvaluateResponse, FieldInfo, FieldsResponse,
    HealthResponse,
};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use retwall_core::WallError;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Maximum request body size (64 KiB). A wall is a few hundred bytes.
pub const MAX_BODY_SIZE: usize = 64 * 1024;

// =============================================================================
// SERVER STATE
// =============================================================================

/// Shared server state.
///
/// The calculator is stateless; only server-wide options live here.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppState {
    /// Refuse every request with domain warnings, regardless of its own flag.
    pub strict: bool,
}

impl AppState {
    #[must_use]
    pub fn new(strict: bool) -> Self {
        Self { strict }
    }
}

// =============================================================================
// CORS
// =============================================================================

/// Origins of a form front-end served from a local dev server.
const LOCAL_FORM_ORIGINS: [&str; 4] = [
    "http://localhost:3000",
    "http://localhost:8080",
    "http://127.0.0.1:3000",
    "http://127.0.0.1:8080",
];

/// Valid header values from a comma-separated origin list.
fn parse_origins(list: &str) -> Vec<HeaderValue> {
    list.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Ignoring CORS origin {:?}: {}", origin, e);
                None
            }
        })
        .collect()
}

/// Front-ends only read defaults and post walls.
fn form_cors(origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

/// CORS policy from `RETWALL_CORS_ORIGINS`: `*`, a comma list, or unset
/// for the local form origins.
fn build_cors_layer() -> CorsLayer {
    let configured = std::env::var("RETWALL_CORS_ORIGINS").ok();

    if configured.as_deref() == Some("*") {
        tracing::warn!("CORS open to every origin");
        return CorsLayer::permissive();
    }

    let origins = configured.as_deref().map(parse_origins).unwrap_or_default();
    if origins.is_empty() {
        tracing::debug!("CORS limited to local form origins");
        return form_cors(parse_origins(&LOCAL_FORM_ORIGINS.join(",")));
    }

    tracing::info!("CORS origins: {:?}", origins);
    form_cors(origins)
}

// =============================================================================
// ROUTER CREATION
// =============================================================================

/// Create the axum router with all endpoints and middleware.
///
/// Middleware stack (outer to inner): tracing, CORS, body limit.
pub fn create_router(state: AppState) -> Router {
    if state.strict {
        tracing::info!("Strict mode: walls with domain warnings are refused");
    }

    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer())
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE));

    Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/defaults", get(handlers::defaults_handler))
        .route("/fields", get(handlers::fields_handler))
        .route("/evaluate", post(handlers::evaluate_handler))
        .layer(middleware)
        .with_state(state)
}

// =============================================================================
// SERVER STARTUP
// =============================================================================

/// Start the HTTP server.
pub async fn run_server(addr: &str, state: AppState) -> Result<(), WallError> {
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| WallError::IoError(format!("Bind failed: {}", e)))?;

    tracing::info!("Retwall HTTP server listening on {}", addr);

    axum::serve(listener, router)
        .await
        .map_err(|e| WallError::IoError(format!("Server error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_list_skips_blanks_and_invalid_values() {
        let origins = parse_origins(" https://walls.example , ,http://bad\norigin,http://localhost:5173");
        assert_eq!(
            origins,
            vec![
                HeaderValue::from_static("https://walls.example"),
                HeaderValue::from_static("http://localhost:5173"),
            ]
        );
    }

    #[test]
    fn local_form_origins_are_valid_headers() {
        let joined = LOCAL_FORM_ORIGINS.join(",");
        assert_eq!(parse_origins(&joined).len(), LOCAL_FORM_ORIGINS.len());
    }
}
