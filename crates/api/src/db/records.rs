//! `PostgreSQL`-backed record store.
//!
//! Queries are runtime-checked (`sqlx::query_as`) rather than the
//! compile-time `query!` macros so the workspace builds without a live
//! database.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use copperleaf_core::{
    CheckoutDraft, CheckoutOrder, ContactSubmission, NewContactSubmission, OrderId, OrderItem,
    SubmissionId,
};

use super::{PersistenceError, RecordStore};

/// Record store backed by the `contact_submissions` and `checkout_orders`
/// tables.
#[derive(Clone)]
pub struct PgRecordStore {
    pool: PgPool,
}

impl PgRecordStore {
    /// Create a store over an existing connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ContactRow {
    id: Uuid,
    name: String,
    email: String,
    message: String,
    created_at: DateTime<Utc>,
}

impl From<ContactRow> for ContactSubmission {
    fn from(row: ContactRow) -> Self {
        Self {
            id: SubmissionId::new(row.id),
            name: row.name,
            email: row.email,
            message: row.message,
            created_at: row.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct OrderRow {
    id: Uuid,
    name: String,
    email: String,
    address: String,
    city: String,
    state: Option<String>,
    country: String,
    zip: String,
    items: Json<Vec<OrderItem>>,
    total_amount: Decimal,
    created_at: DateTime<Utc>,
}

impl From<OrderRow> for CheckoutOrder {
    fn from(row: OrderRow) -> Self {
        Self {
            id: OrderId::new(row.id),
            name: row.name,
            email: row.email,
            address: row.address,
            city: row.city,
            state: row.state,
            country: row.country,
            zip: row.zip,
            items: row.items.0,
            total_amount: row.total_amount,
            created_at: row.created_at,
        }
    }
}

/// Classify schema-level rejections separately from transport failures.
fn map_insert_error(err: sqlx::Error) -> PersistenceError {
    use sqlx::error::ErrorKind;

    if let sqlx::Error::Database(ref db_err) = err {
        match db_err.kind() {
            ErrorKind::NotNullViolation | ErrorKind::CheckViolation => {
                return PersistenceError::Rejected(db_err.message().to_string());
            }
            _ => {}
        }
    }
    PersistenceError::Database(err)
}

#[async_trait]
impl RecordStore for PgRecordStore {
    async fn save_contact(
        &self,
        submission: NewContactSubmission,
    ) -> Result<ContactSubmission, PersistenceError> {
        let row: ContactRow = sqlx::query_as(
            r"
            INSERT INTO contact_submissions (name, email, message)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, message, created_at
            ",
        )
        .bind(&submission.name)
        .bind(&submission.email)
        .bind(&submission.message)
        .fetch_one(&self.pool)
        .await
        .map_err(map_insert_error)?;

        Ok(row.into())
    }

    async fn save_order(&self, draft: CheckoutDraft) -> Result<CheckoutOrder, PersistenceError> {
        let CheckoutDraft {
            name,
            email,
            address,
            city,
            state,
            country,
            zip,
            items,
            total_amount,
        } = draft;

        // Option fields bind to NULL; the NOT NULL columns reject them.
        let row: OrderRow = sqlx::query_as(
            r"
            INSERT INTO checkout_orders
                (name, email, address, city, state, country, zip, items, total_amount)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, name, email, address, city, state, country, zip,
                      items, total_amount, created_at
            ",
        )
        .bind(name)
        .bind(email)
        .bind(address)
        .bind(city)
        .bind(state)
        .bind(country)
        .bind(zip)
        .bind(Json(items))
        .bind(total_amount)
        .fetch_one(&self.pool)
        .await
        .map_err(map_insert_error)?;

        Ok(row.into())
    }

    async fn ping(&self) -> Result<(), PersistenceError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
