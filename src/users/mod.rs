//! # Users Module
//!
//! User registration and lookup. Every handler builds its own
//! `Notifications` for the request and answers through `standardize`.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod validators;


pub use routes::users_routes;
