//! Vote handlers
//!
//! Endpoints for casting, retracting, and listing votes on posts, comments,
//! and answers. The vote kind arrives as a string in the body and is parsed
//! here, so an unknown kind becomes a 400 before the service is involved.

use axum::{extract::State, Json};
use postoria_core::value_objects::{VoteKind, VoteTarget};
use postoria_service::dto::{CastVoteRequest, CastVoteResponse, VoteResponse};
use postoria_service::VoteService;

use crate::extractors::{IdPath, ValidatedJson};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Cast a vote on a post
///
/// POST /posts/{post_id}/votes
pub async fn cast_post_vote(
    State(state): State<AppState>,
    IdPath(post_id): IdPath,
    ValidatedJson(req): ValidatedJson<CastVoteRequest>,
) -> ApiResult<Json<CastVoteResponse>> {
    cast_vote(&state, VoteTarget::post(post_id), req).await
}

/// Cast a vote on a comment
///
/// POST /comments/{comment_id}/votes
pub async fn cast_comment_vote(
    State(state): State<AppState>,
    IdPath(comment_id): IdPath,
    ValidatedJson(req): ValidatedJson<CastVoteRequest>,
) -> ApiResult<Json<CastVoteResponse>> {
    cast_vote(&state, VoteTarget::comment(comment_id), req).await
}

/// Cast a vote on an answer
///
/// POST /answers/{answer_id}/votes
pub async fn cast_answer_vote(
    State(state): State<AppState>,
    IdPath(answer_id): IdPath,
    ValidatedJson(req): ValidatedJson<CastVoteRequest>,
) -> ApiResult<Json<CastVoteResponse>> {
    cast_vote(&state, VoteTarget::answer(answer_id), req).await
}

async fn cast_vote(
    state: &AppState,
    target: VoteTarget,
    req: CastVoteRequest,
) -> ApiResult<Json<CastVoteResponse>> {
    let kind: VoteKind = req.vote_type.parse()?;

    let service = VoteService::new(state.service_context());
    let response = service.cast_vote(target, req.user_id, kind).await?;
    Ok(Json(response))
}

/// Delete a vote by its own id
///
/// DELETE /votes/{vote_id}
pub async fn delete_vote(
    State(state): State<AppState>,
    IdPath(vote_id): IdPath,
) -> ApiResult<NoContent> {
    let service = VoteService::new(state.service_context());
    service.retract_vote(vote_id).await?;
    Ok(NoContent)
}

/// List votes on a post
///
/// GET /posts/{post_id}/votes
pub async fn list_post_votes(
    State(state): State<AppState>,
    IdPath(post_id): IdPath,
) -> ApiResult<Json<Vec<VoteResponse>>> {
    let service = VoteService::new(state.service_context());
    let votes = service.list_votes(VoteTarget::post(post_id)).await?;
    Ok(Json(votes))
}

/// List votes on a comment
///
/// GET /comments/{comment_id}/votes
pub async fn list_comment_votes(
    State(state): State<AppState>,
    IdPath(comment_id): IdPath,
) -> ApiResult<Json<Vec<VoteResponse>>> {
    let service = VoteService::new(state.service_context());
    let votes = service.list_votes(VoteTarget::comment(comment_id)).await?;
    Ok(Json(votes))
}

/// List votes on an answer
///
/// GET /answers/{answer_id}/votes
pub async fn list_answer_votes(
    State(state): State<AppState>,
    IdPath(answer_id): IdPath,
) -> ApiResult<Json<Vec<VoteResponse>>> {
    let service = VoteService::new(state.service_context());
    let votes = service.list_votes(VoteTarget::answer(answer_id)).await?;
    Ok(Json(votes))
}
