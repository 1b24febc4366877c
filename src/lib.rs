//! Notification-pattern JSON API.
//!
//! Requests accumulate validation failures in a per-request
//! [`notifications::Notifications`] and every endpoint answers through
//! [`notifications::standardize`], so clients always see either
//! `{"success": true, "data": ...}` or `{"success": false, "errors": [...]}`.

pub mod common;
pub mod notifications;
pub mod routes;
pub mod users;
