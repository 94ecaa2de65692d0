//! Engagement service
//!
//! Likes and retweets on posts. The two kinds are independent single-valued
//! toggles per (post, user): adding an existing one is a conflict, removing
//! an absent one is not-found, and holding both at once is fine.

use tracing::{info, instrument};

use postoria_core::entities::LikeRetweet;
use postoria_core::error::DomainError;
use postoria_core::value_objects::{EngagementKind, Id};

use crate::dto::{
    EngagementListResponse, LikeRetweetResponse, LikeRetweetRowResponse, LikeRetweetWithUser,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Engagement service
pub struct EngagementService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EngagementService<'a> {
    /// Create a new EngagementService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Add a like or retweet to a post
    #[instrument(skip(self))]
    pub async fn add(
        &self,
        post_id: Id,
        user_id: Id,
        kind: EngagementKind,
    ) -> ServiceResult<LikeRetweetResponse> {
        self.verify_post_exists(post_id).await?;
        self.verify_user_exists(user_id).await?;

        let row = self
            .ctx
            .like_retweet_repo()
            .create(&LikeRetweet::new(post_id, user_id, kind))
            .await?;

        info!(post_id = %post_id, user_id = %user_id, kind = %kind, "Engagement added");

        Ok(row.into())
    }

    /// Remove a like or retweet from a post
    ///
    /// A missing row means the post does not exist or the user never reacted;
    /// both surface as the same not-found error.
    #[instrument(skip(self))]
    pub async fn remove(&self, post_id: Id, user_id: Id, kind: EngagementKind) -> ServiceResult<()> {
        if !self
            .ctx
            .like_retweet_repo()
            .delete(post_id, user_id, kind)
            .await?
        {
            return Err(DomainError::ReactionNotFound { kind: kind.as_str() }.into());
        }

        info!(post_id = %post_id, user_id = %user_id, kind = %kind, "Engagement removed");
        Ok(())
    }

    /// List a post's likes and retweets along with the aggregate state
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        post_id: Id,
        user_id: Option<Id>,
    ) -> ServiceResult<EngagementListResponse> {
        self.verify_post_exists(post_id).await?;

        let rows = self.ctx.like_retweet_repo().find_by_post(post_id).await?;
        let tally = self.ctx.like_retweet_repo().tally(post_id, user_id).await?;

        let mut joined = Vec::with_capacity(rows.len());
        for row in rows {
            let user = self
                .ctx
                .user_repo()
                .find_by_id(row.user_id)
                .await?
                .ok_or(DomainError::UserNotFound(row.user_id))?;
            joined.push(LikeRetweetRowResponse::from(LikeRetweetWithUser { row, user }));
        }

        let (likes, retweets): (Vec<_>, Vec<_>) = joined
            .into_iter()
            .partition(|r| r.engagement_type == "like");

        Ok(EngagementListResponse {
            likes,
            retweets,
            is_liked: tally.is_liked,
            is_retweeted: tally.is_retweeted,
            like_count: tally.like_count,
            retweet_count: tally.retweet_count,
        })
    }

    async fn verify_post_exists(&self, post_id: Id) -> ServiceResult<()> {
        self.ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| DomainError::PostNotFound(post_id).into())
    }

    async fn verify_user_exists(&self, user_id: Id) -> ServiceResult<()> {
        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| DomainError::UserNotFound(user_id).into())
    }
}
