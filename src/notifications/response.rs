// Response envelope shared by every endpoint

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use tracing::debug;

use super::models::Notifications;

/// Outgoing envelope.
///
/// Serializes as `{"success": true, "data": ...}` or
/// `{"success": false, "errors": [...]}`.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse<T> {
    Success { data: Option<T> },
    Failure { errors: Vec<String> },
}

impl<T> ApiResponse<T> {
    pub fn success(data: Option<T>) -> Self {
        ApiResponse::Success { data }
    }

    pub fn failure(errors: Vec<String>) -> Self {
        ApiResponse::Failure { errors }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ApiResponse::Success { .. })
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiResponse::Success { .. } => StatusCode::OK,
            ApiResponse::Failure { .. } => StatusCode::BAD_REQUEST,
        }
    }
}

impl<T: Serialize> Serialize for ApiResponse<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ApiResponse", 2)?;
        match self {
            ApiResponse::Success { data } => {
                state.serialize_field("success", &true)?;
                state.serialize_field("data", data)?;
            }
            ApiResponse::Failure { errors } => {
                state.serialize_field("success", &false)?;
                state.serialize_field("errors", errors)?;
            }
        }
        state.end()
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> axum::response::Response {
        (self.status_code(), Json(self)).into_response()
    }
}

/// Builds the envelope for the end of an operation.
///
/// Any recorded notification makes the result a failure and the payload is
/// dropped. Records are reported exactly as accumulated.
pub fn standardize<T>(notifications: &Notifications, payload: Option<T>) -> ApiResponse<T> {
    if notifications.has_any() {
        debug!(
            error_count = notifications.len(),
            "Operation finished with notifications"
        );
        ApiResponse::failure(notifications.messages())
    } else {
        ApiResponse::success(payload)
    }
}
