//! User handlers

use axum::{extract::State, Json};
use postoria_service::dto::{CreateUserRequest, UserResponse};
use postoria_service::UserService;

use crate::extractors::{IdPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Create a user
///
/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateUserRequest>,
) -> ApiResult<Created<Json<UserResponse>>> {
    let service = UserService::new(state.service_context());
    let user = service.create_user(req.username, req.email).await?;
    Ok(Created(Json(user)))
}

/// Get a user by id
///
/// GET /users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    IdPath(user_id): IdPath,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let user = service.get_user(user_id).await?;
    Ok(Json(user))
}

/// List all users
///
/// GET /users
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<UserResponse>>> {
    let service = UserService::new(state.service_context());
    let users = service.list_users().await?;
    Ok(Json(users))
}
