//! Answer service
//!
//! Answers attach to forum posts only; the post type gates creation.

use tracing::{info, instrument};

use postoria_core::entities::Answer;
use postoria_core::error::DomainError;
use postoria_core::value_objects::Id;

use crate::dto::AnswerResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Answer service
pub struct AnswerService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AnswerService<'a> {
    /// Create a new AnswerService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create an answer on a forum post
    #[instrument(skip(self, content))]
    pub async fn create_answer(
        &self,
        post_id: Id,
        user_id: Id,
        content: String,
    ) -> ServiceResult<AnswerResponse> {
        let post = self
            .ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .ok_or(DomainError::PostNotFound(post_id))?;

        if !post.accepts_answers() {
            return Err(DomainError::AnswersNotAllowed.into());
        }

        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        let answer = self
            .ctx
            .answer_repo()
            .create(&Answer::new(post_id, user_id, content))
            .await?;

        info!(answer_id = %answer.id, post_id = %post_id, "Answer created");
        Ok(answer.into())
    }

    /// List answers on a post, oldest first
    #[instrument(skip(self))]
    pub async fn list_answers(&self, post_id: Id) -> ServiceResult<Vec<AnswerResponse>> {
        self.ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .ok_or(DomainError::PostNotFound(post_id))?;

        let answers = self.ctx.answer_repo().find_by_post(post_id).await?;
        Ok(answers.into_iter().map(AnswerResponse::from).collect())
    }

    /// Delete an answer
    #[instrument(skip(self))]
    pub async fn delete_answer(&self, answer_id: Id) -> ServiceResult<()> {
        if !self.ctx.answer_repo().delete(answer_id).await? {
            return Err(DomainError::AnswerNotFound(answer_id).into());
        }

        info!(answer_id = %answer_id, "Answer deleted");
        Ok(())
    }
}
