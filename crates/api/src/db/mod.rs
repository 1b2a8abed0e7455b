//! Database operations for the Copperleaf `PostgreSQL` store.
//!
//! # Tables
//!
//! Two independent append-only tables, one per record kind:
//!
//! - `contact_submissions` - contact-form submissions
//! - `checkout_orders` - checkout orders
//!
//! The store assigns identifiers (`gen_random_uuid()`) and creation
//! timestamps (`now()`) at insert. No update or delete operations are
//! exposed, and there are no indexes beyond the primary keys.
//!
//! # Migrations
//!
//! Migrations are stored in `crates/api/migrations/` and embedded via
//! [`MIGRATOR`]; the binary runs them at startup.

mod records;

use std::time::Duration;

use async_trait::async_trait;
use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

use copperleaf_core::{CheckoutDraft, CheckoutOrder, ContactSubmission, NewContactSubmission};

pub use records::PgRecordStore;

/// Embedded migrations for the record tables.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Errors that can occur while persisting a record.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The store's schema rejected the record (NOT NULL / CHECK violation).
    #[error("record rejected by store: {0}")]
    Rejected(String),
}

/// Durable storage for contact submissions and checkout orders.
///
/// Implementations are injected into [`AppState`](crate::state::AppState)
/// so tests can substitute an in-memory double for the real store.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Persist a contact submission, returning the stored record with its
    /// store-assigned id and creation time.
    async fn save_contact(
        &self,
        submission: NewContactSubmission,
    ) -> Result<ContactSubmission, PersistenceError>;

    /// Persist a checkout order.
    ///
    /// Required-field enforcement happens here, at the schema level; the
    /// checkout handler deliberately has no check of its own.
    async fn save_order(&self, draft: CheckoutDraft) -> Result<CheckoutOrder, PersistenceError>;

    /// Cheap connectivity probe for the readiness endpoint.
    async fn ping(&self) -> Result<(), PersistenceError>;
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
