//! Contact form route handler.
//!
//! Validates the submission, persists it, then emails the operator.

use askama::Template;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Deserialize;
use tracing::instrument;

use copperleaf_core::NewContactSubmission;

use super::ApiMessage;
use crate::state::AppState;

/// Contact form data.
///
/// Fields are optional so the handler can report missing ones itself
/// instead of failing at deserialization.
#[derive(Debug, Deserialize)]
pub struct ContactForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

/// HTML body for the operator notification.
#[derive(Template)]
#[template(path = "email/contact_notification.html")]
struct ContactNotificationHtml<'a> {
    name: &'a str,
    email: &'a str,
    message: &'a str,
}

/// Plain text body for the operator notification.
#[derive(Template)]
#[template(path = "email/contact_notification.txt")]
struct ContactNotificationText<'a> {
    name: &'a str,
    email: &'a str,
    message: &'a str,
}

/// Submit the contact form.
///
/// POST /api/contact
///
/// Persists the submission, then notifies the configured operator
/// address. A delivery failure after a successful write still reports
/// 500; the stored record is kept.
#[instrument(skip_all)]
pub async fn submit(
    State(state): State<AppState>,
    Json(form): Json<ContactForm>,
) -> impl IntoResponse {
    // Absent and empty fields are rejected alike, before any side effect.
    let (Some(name), Some(email), Some(message)) = (
        non_empty(form.name),
        non_empty(form.email),
        non_empty(form.message),
    ) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiMessage::new("All fields are required.")),
        );
    };

    let submission = match state
        .store()
        .save_contact(NewContactSubmission {
            name,
            email,
            message,
        })
        .await
    {
        Ok(stored) => stored,
        Err(e) => {
            tracing::error!(error = %e, "Failed to store contact submission");
            return failure();
        }
    };

    let html = ContactNotificationHtml {
        name: &submission.name,
        email: &submission.email,
        message: &submission.message,
    }
    .render();
    let text = ContactNotificationText {
        name: &submission.name,
        email: &submission.email,
        message: &submission.message,
    }
    .render();
    let (text, html) = match (text, html) {
        (Ok(text), Ok(html)) => (text, html),
        (Err(e), _) | (_, Err(e)) => {
            tracing::error!(error = %e, "Failed to render contact notification");
            return failure();
        }
    };

    let subject = format!("New contact form submission from {}", submission.name);
    match state
        .notifier()
        .send(&state.config().contact_recipient, &subject, &text, &html)
        .await
    {
        Ok(()) => {
            tracing::info!(id = %submission.id, "Contact submission stored and operator notified");
            (
                StatusCode::OK,
                Json(ApiMessage::new("Message sent successfully.")),
            )
        }
        Err(e) => {
            // The record is already durably stored at this point; the
            // caller still sees a failure.
            tracing::error!(id = %submission.id, error = %e, "Failed to send contact notification");
            failure()
        }
    }
}

/// Generic failure response; the original error is only logged.
fn failure() -> (StatusCode, Json<ApiMessage>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiMessage::new("Failed to send message.")),
    )
}

/// Treat absent and empty values the same way.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
