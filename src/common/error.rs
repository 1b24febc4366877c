// Error handling types for the API

use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;
use tracing::error;

use crate::notifications::ApiResponse;

/// Infrastructure failures.
///
/// Validation problems are not errors; they go into `Notifications`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not Found: {0}")]
    NotFound(String),
    #[error("Database Error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        let message = match self {
            ApiError::NotFound(msg) => msg,
            ApiError::Database(e) => {
                error!(error = %e, "Database error occurred");
                "Database operation failed".to_string()
            }
        };

        let body = ApiResponse::<()>::failure(vec![message]);
        (status, axum::Json(body)).into_response()
    }
}
