use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    Json,
};
use std::sync::Arc;

use super::models::{RegisterUserRequest, User};
use super::services::UsersService;
use super::validators::RegisterUserValidator;
use crate::common::{ApiError, AppState, Validator};
use crate::notifications::{standardize, ApiResponse, Notifications};

/// POST /api/users - Register a new user
pub async fn register_user(
    Extension(state): Extension<Arc<AppState>>,
    payload: Result<Json<RegisterUserRequest>, JsonRejection>,
) -> Result<ApiResponse<User>, ApiError> {
    let mut notifications = Notifications::new();

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            notifications.add_external(std::iter::once(&rejection));
            return Ok(standardize(&notifications, None));
        }
    };

    if !RegisterUserValidator.validate(&request, &mut notifications) {
        return Ok(standardize(&notifications, None));
    }

    let users_service = UsersService::new(state.db.clone());
    let user = users_service.register(request, &mut notifications).await?;

    Ok(standardize(&notifications, user))
}

/// GET /api/users - List users
pub async fn list_users(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<ApiResponse<Vec<User>>, ApiError> {
    let notifications = Notifications::new();
    let users_service = UsersService::new(state.db.clone());

    let users = users_service.list().await?;

    Ok(standardize(&notifications, Some(users)))
}

/// GET /api/users/:id - Get user by ID
pub async fn get_user(
    Extension(state): Extension<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<ApiResponse<User>, ApiError> {
    let notifications = Notifications::new();
    let users_service = UsersService::new(state.db.clone());

    let user = users_service.find_by_id(&user_id).await?;

    Ok(standardize(&notifications, Some(user)))
}
