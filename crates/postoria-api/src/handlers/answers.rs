//! Answer handlers

use axum::{extract::State, Json};
use postoria_service::dto::{AnswerResponse, CreateAnswerRequest};
use postoria_service::AnswerService;

use crate::extractors::{IdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Create an answer on a forum post
///
/// POST /posts/{post_id}/answers
pub async fn create_answer(
    State(state): State<AppState>,
    IdPath(post_id): IdPath,
    ValidatedJson(req): ValidatedJson<CreateAnswerRequest>,
) -> ApiResult<Created<Json<AnswerResponse>>> {
    let service = AnswerService::new(state.service_context());
    let answer = service
        .create_answer(post_id, req.user_id, req.content)
        .await?;
    Ok(Created(Json(answer)))
}

/// List answers on a post
///
/// GET /posts/{post_id}/answers
pub async fn list_answers(
    State(state): State<AppState>,
    IdPath(post_id): IdPath,
) -> ApiResult<Json<Vec<AnswerResponse>>> {
    let service = AnswerService::new(state.service_context());
    let answers = service.list_answers(post_id).await?;
    Ok(Json(answers))
}

/// Delete an answer
///
/// DELETE /answers/{answer_id}
pub async fn delete_answer(
    State(state): State<AppState>,
    IdPath(answer_id): IdPath,
) -> ApiResult<NoContent> {
    let service = AnswerService::new(state.service_context());
    service.delete_answer(answer_id).await?;
    Ok(NoContent)
}
