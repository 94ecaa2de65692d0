//! Tally service
//!
//! Read-side count aggregation. Counts are always derived from the reaction
//! rows at request time; nothing is cached or denormalized.

use tracing::instrument;

use postoria_core::entities::{EngagementTally, VoteTally};
use postoria_core::error::DomainError;
use postoria_core::value_objects::{Id, TargetKind, VoteTarget};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Tally service
pub struct TallyService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TallyService<'a> {
    /// Create a new TallyService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Vote counts for a target, with the requesting user's own vote
    #[instrument(skip(self))]
    pub async fn vote_tally(
        &self,
        target: VoteTarget,
        user_id: Option<Id>,
    ) -> ServiceResult<VoteTally> {
        let exists = match target.kind {
            TargetKind::Post => self.ctx.post_repo().find_by_id(target.id).await?.is_some(),
            TargetKind::Comment => self.ctx.comment_repo().find_by_id(target.id).await?.is_some(),
            TargetKind::Answer => self.ctx.answer_repo().find_by_id(target.id).await?.is_some(),
        };
        if !exists {
            return Err(target.not_found().into());
        }

        Ok(self.ctx.vote_repo().tally(target, user_id).await?)
    }

    /// Like/retweet counts for a post, with the requesting user's own state
    #[instrument(skip(self))]
    pub async fn engagement_tally(
        &self,
        post_id: Id,
        user_id: Option<Id>,
    ) -> ServiceResult<EngagementTally> {
        if self.ctx.post_repo().find_by_id(post_id).await?.is_none() {
            return Err(DomainError::PostNotFound(post_id).into());
        }

        Ok(self.ctx.like_retweet_repo().tally(post_id, user_id).await?)
    }
}
