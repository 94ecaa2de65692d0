//! Like/retweet handlers
//!
//! Endpoints for the engagement toggles on posts. Removal takes its
//! parameters from the query string, matching the wire contract.

use axum::{
    extract::{Query, State},
    Json,
};
use postoria_core::value_objects::EngagementKind;
use postoria_service::dto::{
    EngageRequest, EngagementCreatedResponse, EngagementListResponse, EngagementQuery,
    RemoveEngagementQuery,
};
use postoria_service::EngagementService;

use crate::extractors::{IdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Like or retweet a post
///
/// POST /posts/{post_id}/like-retweet
pub async fn add_engagement(
    State(state): State<AppState>,
    IdPath(post_id): IdPath,
    ValidatedJson(req): ValidatedJson<EngageRequest>,
) -> ApiResult<Created<Json<EngagementCreatedResponse>>> {
    let kind: EngagementKind = req.engagement_type.parse()?;

    let service = EngagementService::new(state.service_context());
    let row = service.add(post_id, req.user_id, kind).await?;

    Ok(Created(Json(EngagementCreatedResponse {
        message: format!("Post {kind}d successfully"),
        action: row,
    })))
}

/// Remove a like or retweet from a post
///
/// DELETE /posts/{post_id}/like-retweet?userId={user_id}&type={kind}
pub async fn remove_engagement(
    State(state): State<AppState>,
    IdPath(post_id): IdPath,
    Query(query): Query<RemoveEngagementQuery>,
) -> ApiResult<NoContent> {
    let kind: EngagementKind = query.engagement_type.parse()?;

    let service = EngagementService::new(state.service_context());
    service.remove(post_id, query.user_id, kind).await?;
    Ok(NoContent)
}

/// Get likes and retweets for a post
///
/// GET /posts/{post_id}/like-retweet?userId={user_id}
pub async fn get_engagement(
    State(state): State<AppState>,
    IdPath(post_id): IdPath,
    Query(query): Query<EngagementQuery>,
) -> ApiResult<Json<EngagementListResponse>> {
    let service = EngagementService::new(state.service_context());
    let response = service.list(post_id, query.user_id).await?;
    Ok(Json(response))
}
