//! Follow service
//!
//! Directed follower edges between users. Following is a single-valued
//! toggle per (follower, following) pair, the same shape as an engagement:
//! adding an existing edge is a conflict, removing an absent one is
//! not-found. Following yourself is rejected outright.

use tracing::{info, instrument};

use postoria_core::entities::Follow;
use postoria_core::error::DomainError;
use postoria_core::value_objects::Id;

use crate::dto::{FollowCreatedResponse, UserSummaryResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Follow service
pub struct FollowService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FollowService<'a> {
    /// Create a new FollowService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Make `follower_id` follow `following_id`
    #[instrument(skip(self))]
    pub async fn follow(
        &self,
        follower_id: Id,
        following_id: Id,
    ) -> ServiceResult<FollowCreatedResponse> {
        if follower_id == following_id {
            return Err(DomainError::SelfFollow.into());
        }
        if self.ctx.user_repo().find_by_id(following_id).await?.is_none() {
            return Err(DomainError::FollowTargetNotFound(following_id).into());
        }
        self.verify_user_exists(follower_id).await?;

        let follow = self
            .ctx
            .follow_repo()
            .create(&Follow::new(follower_id, following_id))
            .await?;

        info!(follower_id = %follower_id, following_id = %following_id, "Follow added");

        Ok(FollowCreatedResponse {
            message: "User followed successfully",
            follow: follow.into(),
        })
    }

    /// Make `follower_id` stop following `following_id`
    ///
    /// An absent edge is not-found; there is nothing to validate beyond that,
    /// so missing users fall out the same way.
    #[instrument(skip(self))]
    pub async fn unfollow(&self, follower_id: Id, following_id: Id) -> ServiceResult<()> {
        if !self
            .ctx
            .follow_repo()
            .delete(follower_id, following_id)
            .await?
        {
            return Err(DomainError::NotFollowing.into());
        }

        info!(follower_id = %follower_id, following_id = %following_id, "Follow removed");
        Ok(())
    }

    /// List the users who follow `user_id`
    #[instrument(skip(self))]
    pub async fn followers(&self, user_id: Id) -> ServiceResult<Vec<UserSummaryResponse>> {
        self.verify_user_exists(user_id).await?;

        let users = self.ctx.follow_repo().followers(user_id).await?;
        Ok(users.into_iter().map(UserSummaryResponse::from).collect())
    }

    /// List the users `user_id` follows
    #[instrument(skip(self))]
    pub async fn following(&self, user_id: Id) -> ServiceResult<Vec<UserSummaryResponse>> {
        self.verify_user_exists(user_id).await?;

        let users = self.ctx.follow_repo().following(user_id).await?;
        Ok(users.into_iter().map(UserSummaryResponse::from).collect())
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
