//! # API Endpoint Handlers
//!
//! This module implements the actual HTTP endpoint handlers.

use super::{
    AppState,
    types::{DefaultsResponse, EvaluateRequest, EvaluateResponse, FieldsResponse, HealthResponse},
};
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use retwall_core::{WallError, breakdown, check_domain, evaluate};

// =============================================================================
// HEALTH HANDLER
// =============================================================================

/// Health check endpoint.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse::default())
}

// =============================================================================
// DEFAULTS / FIELDS HANDLERS
// =============================================================================

/// The wall a fresh form starts from.
pub async fn defaults_handler() -> impl IntoResponse {
    (StatusCode::OK, Json(DefaultsResponse::default()))
}

/// Field catalogue with names, aliases, units and defaults.
pub async fn fields_handler() -> impl IntoResponse {
    (StatusCode::OK, Json(FieldsResponse::catalogue()))
}

// =============================================================================
// EVALUATE HANDLER
// =============================================================================

/// Evaluate one wall.
pub async fn evaluate_handler(
    State(state): State<AppState>,
    Json(request): Json<EvaluateRequest>,
) -> impl IntoResponse {
    let draft = match request.to_draft() {
        Ok(d) => d,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(EvaluateResponse::error(format!("Invalid wall: {}", e), &[])),
            );
        }
    };

    let input = draft.build();
    let warnings = check_domain(&input);
    for warning in &warnings {
        tracing::warn!("Domain warning for wall '{}': {}", draft.profile().name, warning);
    }

    if (request.strict || state.strict) && !warnings.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(EvaluateResponse::error(
                format!(
                    "Strict evaluation refused: {}",
                    WallError::DomainCheckFailed(warnings.len())
                ),
                &warnings,
            )),
        );
    }

    let result = evaluate(&input);
    tracing::info!(
        wall = %draft.profile().name,
        sliding_ok = result.sliding_ok,
        overturning_ok = result.overturning_ok,
        bearing_ok = result.bearing_ok,
        "Evaluated wall"
    );

    (
        StatusCode::OK,
        Json(EvaluateResponse::success(
            &draft,
            result,
            breakdown(&input),
            &warnings,
        )),
    )
}
