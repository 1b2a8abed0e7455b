//! Copperleaf Core - Shared types library.
//!
//! This crate provides the domain types shared between the Copperleaf API
//! binary and its tests:
//! - contact-form submissions
//! - checkout orders
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access,
//! no HTTP clients. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs and the two record kinds with their creation
//!   payloads

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
