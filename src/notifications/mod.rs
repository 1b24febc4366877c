//! # Notifications Module
//!
//! Per-request accumulation of validation failures and the single place
//! where they are turned into an outgoing response:
//! - `Notifications` collects failures in the order checks ran
//! - `standardize` shapes the success/failure envelope
//! - `adapter` maps framework-produced field errors into notifications
//!
//! A `Notifications` value belongs to exactly one request. Handlers create
//! it, pass it down by `&mut`, and drop it with the response.

pub mod adapter;
pub mod models;
pub mod response;

#[cfg(test)]
mod tests;

pub use adapter::{external_errors_to_notifications, ExternalError, FieldError};
pub use models::{Notification, Notifications};
pub use response::{standardize, ApiResponse};
