//! Checkout route handler.
//!
//! Persists the order exactly as submitted, then emails the customer a
//! confirmation. No required-field check happens here: the store schema
//! decides acceptance, and the submitted total is persisted without being
//! recomputed from the line items.

use askama::Template;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use tracing::instrument;

use copperleaf_core::CheckoutDraft;

use super::ApiMessage;
use crate::state::AppState;

/// HTML body for the order confirmation.
#[derive(Template)]
#[template(path = "email/order_confirmation.html")]
struct OrderConfirmationHtml<'a> {
    name: &'a str,
    total_amount: &'a str,
    address_line: &'a str,
}

/// Plain text body for the order confirmation.
#[derive(Template)]
#[template(path = "email/order_confirmation.txt")]
struct OrderConfirmationText<'a> {
    name: &'a str,
    total_amount: &'a str,
    address_line: &'a str,
}

/// Place an order.
///
/// POST /api/checkout
///
/// A storage failure and a delivery failure are indistinguishable in the
/// response; both report the same generic 500. A delivery failure after a
/// successful write leaves the stored order in place.
#[instrument(skip_all)]
pub async fn submit(
    State(state): State<AppState>,
    Json(draft): Json<CheckoutDraft>,
) -> impl IntoResponse {
    let order = match state.store().save_order(draft).await {
        Ok(stored) => stored,
        Err(e) => {
            tracing::error!(error = %e, "Failed to store checkout order");
            return failure();
        }
    };

    // Blind concatenation, absent state included as an empty segment,
    // matching the legacy confirmation format.
    let address_line = format!(
        "{}, {}, {}, {}",
        order.address,
        order.city,
        order.state.as_deref().unwrap_or_default(),
        order.zip
    );
    let total_amount = order.total_amount.to_string();

    let html = OrderConfirmationHtml {
        name: &order.name,
        total_amount: &total_amount,
        address_line: &address_line,
    }
    .render();
    let text = OrderConfirmationText {
        name: &order.name,
        total_amount: &total_amount,
        address_line: &address_line,
    }
    .render();
    let (text, html) = match (text, html) {
        (Ok(text), Ok(html)) => (text, html),
        (Err(e), _) | (_, Err(e)) => {
            tracing::error!(error = %e, "Failed to render order confirmation");
            return failure();
        }
    };

    match state
        .notifier()
        .send(&order.email, "Your order confirmation", &text, &html)
        .await
    {
        Ok(()) => {
            tracing::info!(id = %order.id, "Checkout order stored and confirmation sent");
            (
                StatusCode::CREATED,
                Json(ApiMessage::new("Order placed successfully.")),
            )
        }
        Err(e) => {
            tracing::error!(id = %order.id, error = %e, "Failed to send order confirmation");
            failure()
        }
    }
}

/// Generic failure response; storage and delivery failures share it.
fn failure() -> (StatusCode, Json<ApiMessage>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiMessage::new("Checkout failed. Please try again.")),
    )
}
