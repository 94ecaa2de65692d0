//! Post handlers

use axum::{extract::State, Json};
use postoria_core::entities::PostType;
use postoria_service::dto::{CreatePostRequest, CreatedResponse, PostResponse};
use postoria_service::PostService;

use crate::extractors::{IdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Create a post
///
/// POST /posts
pub async fn create_post(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreatePostRequest>,
) -> ApiResult<Created<Json<CreatedResponse<PostResponse>>>> {
    let post_type: PostType = req.post_type.parse()?;

    let service = PostService::new(state.service_context());
    let post = service.create_post(req.user_id, req.content, post_type).await?;

    Ok(Created(Json(CreatedResponse {
        message: "Post created successfully",
        body: post,
    })))
}

/// Get a post by id
///
/// GET /posts/{post_id}
pub async fn get_post(
    State(state): State<AppState>,
    IdPath(post_id): IdPath,
) -> ApiResult<Json<PostResponse>> {
    let service = PostService::new(state.service_context());
    let post = service.get_post(post_id).await?;
    Ok(Json(post))
}

/// List all posts, newest first
///
/// GET /posts
pub async fn list_posts(State(state): State<AppState>) -> ApiResult<Json<Vec<PostResponse>>> {
    let service = PostService::new(state.service_context());
    let posts = service.list_posts().await?;
    Ok(Json(posts))
}

/// Delete a post
///
/// DELETE /posts/{post_id}
pub async fn delete_post(
    State(state): State<AppState>,
    IdPath(post_id): IdPath,
) -> ApiResult<NoContent> {
    let service = PostService::new(state.service_context());
    service.delete_post(post_id).await?;
    Ok(NoContent)
}
