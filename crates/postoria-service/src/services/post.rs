//! Post service

use tracing::{info, instrument};

use postoria_core::entities::{Post, PostType};
use postoria_core::error::DomainError;
use postoria_core::value_objects::Id;

use crate::dto::PostResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Post service
pub struct PostService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PostService<'a> {
    /// Create a new PostService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a post
    #[instrument(skip(self, content))]
    pub async fn create_post(
        &self,
        user_id: Id,
        content: String,
        post_type: PostType,
    ) -> ServiceResult<PostResponse> {
        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        let post = self
            .ctx
            .post_repo()
            .create(&Post::new(user_id, content, post_type))
            .await?;

        info!(post_id = %post.id, user_id = %user_id, post_type = %post_type, "Post created");
        Ok(post.into())
    }

    /// Get a post by id
    #[instrument(skip(self))]
    pub async fn get_post(&self, post_id: Id) -> ServiceResult<PostResponse> {
        let post = self
            .ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .ok_or(DomainError::PostNotFound(post_id))?;
        Ok(post.into())
    }

    /// List all posts, newest first
    #[instrument(skip(self))]
    pub async fn list_posts(&self) -> ServiceResult<Vec<PostResponse>> {
        let posts = self.ctx.post_repo().list().await?;
        Ok(posts.into_iter().map(PostResponse::from).collect())
    }

    /// Delete a post
    #[instrument(skip(self))]
    pub async fn delete_post(&self, post_id: Id) -> ServiceResult<()> {
        if !self.ctx.post_repo().delete(post_id).await? {
            return Err(DomainError::PostNotFound(post_id).into());
        }

        info!(post_id = %post_id, "Post deleted");
        Ok(())
    }
}
