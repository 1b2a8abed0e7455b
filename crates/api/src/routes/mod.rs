//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                   - Liveness string
//! GET  /api/some-endpoint  - Connectivity check (fixed payload)
//! GET  /health/ready       - Readiness (store ping)
//! POST /api/contact        - Contact-form submission
//! POST /api/checkout       - Order checkout
//! ```
//!
//! Each POST handler runs a single linear sequence per request:
//! validate -> persist -> notify -> respond. Requests are independent and
//! stateless between calls.

pub mod checkout;
pub mod contact;
pub mod health;

use axum::{
    Router,
    routing::{get, post},
};
use serde::Serialize;

use crate::state::AppState;

/// JSON body shared by every API response.
#[derive(Debug, Serialize)]
pub struct ApiMessage {
    pub message: String,
}

impl ApiMessage {
    /// Build a message body from anything string-like.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Create all routes for the service.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(health::root))
        .route("/api/some-endpoint", get(health::check))
        .route("/health/ready", get(health::readiness))
        .route("/api/contact", post(contact::submit))
        .route("/api/checkout", post(checkout::submit))
}
