//! Follow handlers
//!
//! The user being followed or unfollowed is addressed in the path; the
//! follower comes from the request body.

use axum::{extract::State, Json};
use postoria_service::dto::{FollowCreatedResponse, FollowRequest, UserSummaryResponse};
use postoria_service::FollowService;

use crate::extractors::{IdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Follow a user
///
/// POST /users/{user_id}/follow
pub async fn follow_user(
    State(state): State<AppState>,
    IdPath(following_id): IdPath,
    ValidatedJson(req): ValidatedJson<FollowRequest>,
) -> ApiResult<Created<Json<FollowCreatedResponse>>> {
    let service = FollowService::new(state.service_context());
    let response = service.follow(req.follower_id, following_id).await?;
    Ok(Created(Json(response)))
}

/// Unfollow a user
///
/// DELETE /users/{user_id}/unfollow
pub async fn unfollow_user(
    State(state): State<AppState>,
    IdPath(following_id): IdPath,
    ValidatedJson(req): ValidatedJson<FollowRequest>,
) -> ApiResult<NoContent> {
    let service = FollowService::new(state.service_context());
    service.unfollow(req.follower_id, following_id).await?;
    Ok(NoContent)
}

/// Get the followers of a user
///
/// GET /users/{user_id}/followers
pub async fn list_followers(
    State(state): State<AppState>,
    IdPath(user_id): IdPath,
) -> ApiResult<Json<Vec<UserSummaryResponse>>> {
    let service = FollowService::new(state.service_context());
    let followers = service.followers(user_id).await?;
    Ok(Json(followers))
}

/// Get the users a user follows
///
/// GET /users/{user_id}/following
pub async fn list_following(
    State(state): State<AppState>,
    IdPath(user_id): IdPath,
) -> ApiResult<Json<Vec<UserSummaryResponse>>> {
    let service = FollowService::new(state.service_context());
    let following = service.following(user_id).await?;
    Ok(Json(following))
}
