// src/routes.rs
//! Router composition shared by the binary and the tests

use axum::{extract::Extension, routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::common::AppState;
use crate::notifications::{standardize, ApiResponse, Notifications};
use crate::users;

/// GET /health - Liveness check, answers with an empty success envelope
pub async fn health() -> ApiResponse<()> {
    standardize(&Notifications::new(), None)
}

pub fn app_router(state: Arc<AppState>, cors_origins: &[String]) -> Router {
    let origins: Vec<axum::http::HeaderValue> = cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    Router::new()
        .route("/health", get(health))
        .merge(users::users_routes())
        .layer(Extension(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
