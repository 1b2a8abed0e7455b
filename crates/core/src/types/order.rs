//! Checkout order records.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::id::OrderId;

/// A single line item in a checkout order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: String,
    pub quantity: i64,
}

/// A stored checkout order.
///
/// Orders are append-only: there is no update or cancel path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutOrder {
    /// Store-assigned identifier.
    pub id: OrderId,
    pub name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub state: Option<String>,
    pub country: String,
    pub zip: String,
    /// Line items exactly as submitted, order preserved.
    pub items: Vec<OrderItem>,
    /// Total exactly as submitted by the caller. The server does not
    /// recompute or cross-check it against `items`.
    pub total_amount: Decimal,
    /// Server-assigned creation time.
    pub created_at: DateTime<Utc>,
}

/// Unvalidated checkout payload.
///
/// Every scalar field is optional: the checkout handler performs no
/// required-field check of its own and passes absent fields through to
/// the store, whose schema constraints decide acceptance.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutDraft {
    pub name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub zip: Option<String>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    pub total_amount: Option<Decimal>,
}
