//! Test doubles and request helpers for router-level tests.
//!
//! The store double mirrors the `checkout_orders` schema constraints so
//! required-field enforcement can be exercised without a live database.

#![allow(clippy::unwrap_used, dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, header};
use axum::response::Response;
use chrono::Utc;
use secrecy::SecretString;
use serde_json::Value;
use uuid::Uuid;

use copperleaf_api::config::{AppConfig, EmailConfig};
use copperleaf_api::db::{PersistenceError, RecordStore};
use copperleaf_api::routes;
use copperleaf_api::services::{DeliveryError, Notifier};
use copperleaf_api::state::AppState;
use copperleaf_core::{
    CheckoutDraft, CheckoutOrder, ContactSubmission, NewContactSubmission, OrderId, SubmissionId,
};

/// In-memory record store double.
#[derive(Default)]
pub struct MemoryRecordStore {
    pub contacts: Mutex<Vec<ContactSubmission>>,
    pub orders: Mutex<Vec<CheckoutOrder>>,
    /// Number of `save_order` calls, including rejected ones. Lets tests
    /// assert that the checkout handler attempted the write instead of
    /// pre-checking fields itself.
    pub order_attempts: AtomicUsize,
    fail_writes: bool,
}

impl MemoryRecordStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// A store whose every operation fails, for persistence-error paths.
    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            fail_writes: true,
            ..Self::default()
        })
    }
}

/// Schema-level required-field enforcement: NOT NULL plus a non-empty
/// CHECK on every required column.
fn required(field: Option<String>, column: &str) -> Result<String, PersistenceError> {
    match field {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(PersistenceError::Rejected(format!(
            "null value or empty string in column \"{column}\""
        ))),
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn save_contact(
        &self,
        submission: NewContactSubmission,
    ) -> Result<ContactSubmission, PersistenceError> {
        if self.fail_writes {
            return Err(PersistenceError::Rejected(
                "simulated storage failure".to_string(),
            ));
        }
        let stored = ContactSubmission {
            id: SubmissionId::new(Uuid::new_v4()),
            name: submission.name,
            email: submission.email,
            message: submission.message,
            created_at: Utc::now(),
        };
        self.contacts.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn save_order(&self, draft: CheckoutDraft) -> Result<CheckoutOrder, PersistenceError> {
        self.order_attempts.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes {
            return Err(PersistenceError::Rejected(
                "simulated storage failure".to_string(),
            ));
        }
        let stored = CheckoutOrder {
            id: OrderId::new(Uuid::new_v4()),
            name: required(draft.name, "name")?,
            email: required(draft.email, "email")?,
            address: required(draft.address, "address")?,
            city: required(draft.city, "city")?,
            state: draft.state,
            country: required(draft.country, "country")?,
            zip: required(draft.zip, "zip")?,
            items: draft.items,
            total_amount: draft.total_amount.ok_or_else(|| {
                PersistenceError::Rejected(
                    "null value in column \"total_amount\"".to_string(),
                )
            })?,
            created_at: Utc::now(),
        };
        self.orders.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn ping(&self) -> Result<(), PersistenceError> {
        if self.fail_writes {
            return Err(PersistenceError::Rejected(
                "simulated outage".to_string(),
            ));
        }
        Ok(())
    }
}

/// One email captured by the recording notifier.
#[derive(Debug, Clone)]
pub struct SentEmail {
    pub to: String,
    pub subject: String,
    pub text_body: String,
    pub html_body: String,
}

/// Notifier double that records every send, or fails them all.
#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: Mutex<Vec<SentEmail>>,
    fail_sends: bool,
}

impl RecordingNotifier {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// A notifier whose every send fails, for delivery-error paths.
    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            fail_sends: true,
            ..Self::default()
        })
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(
        &self,
        to: &str,
        subject: &str,
        text_body: &str,
        html_body: &str,
    ) -> Result<(), DeliveryError> {
        if self.fail_sends {
            return Err(DeliveryError::Refused(
                "simulated delivery failure".to_string(),
            ));
        }
        self.sent.lock().unwrap().push(SentEmail {
            to: to.to_string(),
            subject: subject.to_string(),
            text_body: text_body.to_string(),
            html_body: html_body.to_string(),
        });
        Ok(())
    }
}

/// Configuration for tests; never used to open real connections.
pub fn test_config() -> AppConfig {
    AppConfig {
        database_url: SecretString::from("postgres://localhost/copperleaf_test"),
        host: "127.0.0.1".parse().unwrap(),
        port: 5000,
        email: EmailConfig {
            smtp_host: "localhost".to_string(),
            smtp_port: 587,
            smtp_username: "orders@example.com".to_string(),
            smtp_password: SecretString::from("test-only-password"),
            from_address: "orders@example.com".to_string(),
        },
        contact_recipient: "owner@example.com".to_string(),
        sentry_dsn: None,
        sentry_environment: None,
    }
}

/// Build the full router over the given doubles.
pub fn app(store: Arc<MemoryRecordStore>, notifier: Arc<RecordingNotifier>) -> Router {
    let state = AppState::new(test_config(), store, notifier);
    routes::routes().with_state(state)
}

/// POST request with a JSON body.
pub fn json_request(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// GET request with an empty body.
pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Read a response body as JSON.
pub async fn response_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Read a response body as text.
pub async fn response_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
