//! Vote service
//!
//! Orchestrates vote casting, retraction, and listing. The transition itself
//! (create / switch / toggle-off) lives in the core resolver and runs inside
//! the repository's transaction; this layer validates the target and the
//! voter before handing off.

use tracing::{info, instrument};

use postoria_core::error::DomainError;
use postoria_core::value_objects::{Id, TargetKind, VoteKind, VotePolicy, VoteTarget};

use crate::dto::{CastVoteResponse, VoteResponse, VoteResultBody, VoteWithUser};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Vote service
pub struct VoteService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> VoteService<'a> {
    /// Create a new VoteService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Cast a vote on a target, resolving it against the caller's existing
    /// vote. The policy follows the target kind: posts and comments allow
    /// switch and toggle-off, answers reject a second vote.
    #[instrument(skip(self))]
    pub async fn cast_vote(
        &self,
        target: VoteTarget,
        user_id: Id,
        requested: VoteKind,
    ) -> ServiceResult<CastVoteResponse> {
        self.verify_target_exists(target).await?;
        self.verify_user_exists(user_id).await?;

        let policy = VotePolicy::for_target(target.kind);
        let resolution = self
            .ctx
            .vote_repo()
            .resolve(target, user_id, requested, policy)
            .await?;

        info!(
            target = %target,
            user_id = %user_id,
            action = %resolution.action,
            kind = %resolution.kind,
            "Vote resolved"
        );

        Ok(CastVoteResponse {
            message: resolution.action.message(),
            vote_result: VoteResultBody {
                action: resolution.action.as_str(),
                vote_type: resolution.kind.as_str(),
            },
            upvotes: resolution.tally.upvotes,
            downvotes: resolution.tally.downvotes,
            user_vote: resolution.tally.user_vote.map(|k| k.as_str()),
        })
    }

    /// Delete a vote by its own id, regardless of target
    #[instrument(skip(self))]
    pub async fn retract_vote(&self, vote_id: Id) -> ServiceResult<()> {
        if !self.ctx.vote_repo().delete(vote_id).await? {
            return Err(DomainError::VoteNotFound(vote_id).into());
        }

        info!(vote_id = %vote_id, "Vote retracted");
        Ok(())
    }

    /// List all votes on a target with their owners
    #[instrument(skip(self))]
    pub async fn list_votes(&self, target: VoteTarget) -> ServiceResult<Vec<VoteResponse>> {
        self.verify_target_exists(target).await?;

        let votes = self.ctx.vote_repo().find_by_target(target).await?;

        let mut rows = Vec::with_capacity(votes.len());
        for vote in votes {
            let user = self
                .ctx
                .user_repo()
                .find_by_id(vote.user_id)
                .await?
                .ok_or(DomainError::UserNotFound(vote.user_id))?;
            rows.push(VoteWithUser { vote, user }.into());
        }

        Ok(rows)
    }

    async fn verify_target_exists(&self, target: VoteTarget) -> ServiceResult<()> {
        let exists = match target.kind {
            TargetKind::Post => self.ctx.post_repo().find_by_id(target.id).await?.is_some(),
            TargetKind::Comment => self.ctx.comment_repo().find_by_id(target.id).await?.is_some(),
            TargetKind::Answer => self.ctx.answer_repo().find_by_id(target.id).await?.is_some(),
        };

        if exists {
            Ok(())
        } else {
            Err(target.not_found().into())
        }
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
