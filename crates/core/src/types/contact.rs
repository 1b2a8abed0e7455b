//! Contact-form submission records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::id::SubmissionId;

/// A stored contact-form submission.
///
/// Submissions are append-only: once written they are never mutated or
/// deleted by this system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactSubmission {
    /// Store-assigned identifier.
    pub id: SubmissionId,
    pub name: String,
    /// Submitter's address exactly as provided. No format validation is
    /// applied, only the non-empty requirement.
    pub email: String,
    pub message: String,
    /// Server-assigned creation time, immutable after insert.
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a contact submission.
///
/// Built by the contact handler after its required-field check passes;
/// the store assigns `id` and `created_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}
