//! Liveness, connectivity, and readiness handlers.

use axum::{Json, extract::State, http::StatusCode};

use super::ApiMessage;
use crate::state::AppState;

/// Plain liveness string at the root route.
///
/// Returns a fixed string if the server is running. Does not check
/// dependencies.
pub async fn root() -> &'static str {
    "Copperleaf API is running"
}

/// Connectivity check with a fixed confirmation payload.
///
/// GET /api/some-endpoint
///
/// No validation, no side effects.
pub async fn check() -> Json<ApiMessage> {
    Json(ApiMessage::new("Backend connection successful."))
}

/// Readiness check.
///
/// Verifies store connectivity before returning OK.
/// Returns 503 Service Unavailable if the store is not reachable.
pub async fn readiness(State(state): State<AppState>) -> StatusCode {
    match state.store().ping().await {
        Ok(()) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}
