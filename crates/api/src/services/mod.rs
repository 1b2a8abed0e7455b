//! Service clients shared across handlers.

pub mod email;

pub use email::{DeliveryError, Notifier, SmtpNotifier};
