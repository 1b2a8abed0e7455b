//! Core types for Copperleaf.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod contact;
pub mod id;
pub mod order;

pub use contact::{ContactSubmission, NewContactSubmission};
pub use id::*;
pub use order::{CheckoutDraft, CheckoutOrder, OrderItem};
