//! Comment handlers

use axum::{extract::State, Json};
use postoria_service::dto::{CommentResponse, CreateCommentRequest};
use postoria_service::CommentService;

use crate::extractors::{IdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Create a comment on an idea post
///
/// POST /posts/{post_id}/comments
pub async fn create_comment(
    State(state): State<AppState>,
    IdPath(post_id): IdPath,
    ValidatedJson(req): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<Created<Json<CommentResponse>>> {
    let service = CommentService::new(state.service_context());
    let comment = service
        .create_comment(post_id, req.user_id, req.content)
        .await?;
    Ok(Created(Json(comment)))
}

/// List comments on a post
///
/// GET /posts/{post_id}/comments
pub async fn list_comments(
    State(state): State<AppState>,
    IdPath(post_id): IdPath,
) -> ApiResult<Json<Vec<CommentResponse>>> {
    let service = CommentService::new(state.service_context());
    let comments = service.list_comments(post_id).await?;
    Ok(Json(comments))
}

/// Delete a comment
///
/// DELETE /comments/{comment_id}
pub async fn delete_comment(
    State(state): State<AppState>,
    IdPath(comment_id): IdPath,
) -> ApiResult<NoContent> {
    let service = CommentService::new(state.service_context());
    service.delete_comment(comment_id).await?;
    Ok(NoContent)
}
