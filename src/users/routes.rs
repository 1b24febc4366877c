use axum::{routing::get, Router};

use super::handlers;

/// Creates the users router
///
/// # Routes
/// - `POST /api/users` - Register a user
/// - `GET /api/users` - List users
/// - `GET /api/users/:id` - Get a user
pub fn users_routes() -> Router {
    Router::new()
        .route(
            "/api/users",
            get(handlers::list_users).post(handlers::register_user),
        )
        .route("/api/users/:id", get(handlers::get_user))
}
