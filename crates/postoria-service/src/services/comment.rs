//! Comment service
//!
//! Comments attach to idea posts only; the post type gates creation.

use tracing::{info, instrument};

use postoria_core::entities::Comment;
use postoria_core::error::DomainError;
use postoria_core::value_objects::Id;

use crate::dto::CommentResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a comment on an idea post
    #[instrument(skip(self, content))]
    pub async fn create_comment(
        &self,
        post_id: Id,
        user_id: Id,
        content: String,
    ) -> ServiceResult<CommentResponse> {
        let post = self
            .ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .ok_or(DomainError::PostNotFound(post_id))?;

        if !post.accepts_comments() {
            return Err(DomainError::CommentsNotAllowed.into());
        }

        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        let comment = self
            .ctx
            .comment_repo()
            .create(&Comment::new(post_id, user_id, content))
            .await?;

        info!(comment_id = %comment.id, post_id = %post_id, "Comment created");
        Ok(comment.into())
    }

    /// List comments on a post, oldest first
    #[instrument(skip(self))]
    pub async fn list_comments(&self, post_id: Id) -> ServiceResult<Vec<CommentResponse>> {
        self.ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .ok_or(DomainError::PostNotFound(post_id))?;

        let comments = self.ctx.comment_repo().find_by_post(post_id).await?;
        Ok(comments.into_iter().map(CommentResponse::from).collect())
    }

    /// Delete a comment
    #[instrument(skip(self))]
    pub async fn delete_comment(&self, comment_id: Id) -> ServiceResult<()> {
        if !self.ctx.comment_repo().delete(comment_id).await? {
            return Err(DomainError::CommentNotFound(comment_id).into());
        }

        info!(comment_id = %comment_id, "Comment deleted");
        Ok(())
    }
}
