//! PostgreSQL implementation of VoteRepository
//!
//! `resolve` is the one write path for votes: it reads the caller's existing
//! vote under a row lock, applies the transition, and recounts, all inside a
//! single transaction. The unique constraints on (user, target) remain the
//! authoritative duplicate guard underneath.

use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};
use tracing::instrument;

use postoria_core::entities::{Vote, VoteTally};
use postoria_core::error::DomainError;
use postoria_core::traits::{RepoResult, VoteRepository, VoteResolution};
use postoria_core::value_objects::{
    resolve_transition, Id, TargetKind, VoteAction, VoteKind, VotePolicy, VoteTarget,
};

use crate::models::{VoteModel, VoteTallyModel};

use super::error::{map_db_error, map_unique_violation};

/// The votes column a target kind is stored in
fn target_column(kind: TargetKind) -> &'static str {
    match kind {
        TargetKind::Post => "post_id",
        TargetKind::Comment => "comment_id",
        TargetKind::Answer => "answer_id",
    }
}

/// Count votes on a target and pick out the given user's own vote, on the
/// provided connection so it can run inside a transaction
async fn tally_on(
    conn: &mut PgConnection,
    target: VoteTarget,
    user_id: Option<Id>,
) -> RepoResult<VoteTally> {
    let col = target_column(target.kind);
    let sql = format!(
        r#"
        SELECT
            COUNT(*) FILTER (WHERE kind = 'upvote') AS upvotes,
            COUNT(*) FILTER (WHERE kind = 'downvote') AS downvotes,
            MAX(kind) FILTER (WHERE user_id = $2) AS user_vote
        FROM votes
        WHERE {col} = $1
        "#
    );

    let model = sqlx::query_as::<_, VoteTallyModel>(&sql)
        .bind(target.id.into_inner())
        .bind(user_id.map(Id::into_inner))
        .fetch_one(conn)
        .await
        .map_err(map_db_error)?;

    let user_vote = model.user_vote.as_deref().map(str::parse::<VoteKind>).transpose()?;

    Ok(VoteTally::new(model.upvotes, model.downvotes, user_vote))
}

/// PostgreSQL implementation of VoteRepository
#[derive(Clone)]
pub struct PgVoteRepository {
    pool: PgPool,
}

impl PgVoteRepository {
    /// Create a new PgVoteRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VoteRepository for PgVoteRepository {
    #[instrument(skip(self))]
    async fn find(&self, target: VoteTarget, user_id: Id) -> RepoResult<Option<Vote>> {
        let col = target_column(target.kind);
        let sql = format!(
            r#"
            SELECT id, user_id, post_id, comment_id, answer_id, kind, created_at
            FROM votes
            WHERE {col} = $1 AND user_id = $2
            "#
        );

        let result = sqlx::query_as::<_, VoteModel>(&sql)
            .bind(target.id.into_inner())
            .bind(user_id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        result.map(Vote::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Vote>> {
        let result = sqlx::query_as::<_, VoteModel>(
            r#"
            SELECT id, user_id, post_id, comment_id, answer_id, kind, created_at
            FROM votes
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Vote::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_target(&self, target: VoteTarget) -> RepoResult<Vec<Vote>> {
        let col = target_column(target.kind);
        let sql = format!(
            r#"
            SELECT id, user_id, post_id, comment_id, answer_id, kind, created_at
            FROM votes
            WHERE {col} = $1
            ORDER BY created_at
            "#
        );

        let results = sqlx::query_as::<_, VoteModel>(&sql)
            .bind(target.id.into_inner())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        results.into_iter().map(Vote::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn resolve(
        &self,
        target: VoteTarget,
        user_id: Id,
        requested: VoteKind,
        policy: VotePolicy,
    ) -> RepoResult<VoteResolution> {
        let col = target_column(target.kind);
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Lock the caller's existing vote row (if any) for the duration of
        // the transition so concurrent requests for the same (user, target)
        // serialize here.
        let select_sql = format!(
            r#"
            SELECT id, user_id, post_id, comment_id, answer_id, kind, created_at
            FROM votes
            WHERE {col} = $1 AND user_id = $2
            FOR UPDATE
            "#
        );
        let existing = sqlx::query_as::<_, VoteModel>(&select_sql)
            .bind(target.id.into_inner())
            .bind(user_id.into_inner())
            .fetch_optional(tx.as_mut())
            .await
            .map_err(map_db_error)?;

        let existing_kind = existing
            .as_ref()
            .map(|model| model.kind.parse::<VoteKind>())
            .transpose()?;

        // A policy rejection drops the transaction, rolling back.
        let action = resolve_transition(existing_kind, requested, policy)?;
        // Updated and Removed only come back when an existing row was found.
        let existing_id = existing.as_ref().map(|m| m.id).unwrap_or_default();

        match action {
            VoteAction::Created => {
                let insert_sql = format!(
                    r#"
                    INSERT INTO votes (user_id, {col}, kind)
                    VALUES ($1, $2, $3)
                    "#
                );
                sqlx::query(&insert_sql)
                    .bind(user_id.into_inner())
                    .bind(target.id.into_inner())
                    .bind(requested.as_str())
                    .execute(tx.as_mut())
                    .await
                    .map_err(|e| map_unique_violation(e, || DomainError::AlreadyVoted))?;
            }
            VoteAction::Updated => {
                // Switch in place: the row keeps its id.
                sqlx::query(
                    r#"
                    UPDATE votes
                    SET kind = $1
                    WHERE id = $2
                    "#,
                )
                .bind(requested.as_str())
                .bind(existing_id)
                .execute(tx.as_mut())
                .await
                .map_err(map_db_error)?;
            }
            VoteAction::Removed => {
                sqlx::query(
                    r#"
                    DELETE FROM votes
                    WHERE id = $1
                    "#,
                )
                .bind(existing_id)
                .execute(tx.as_mut())
                .await
                .map_err(map_db_error)?;
            }
        }

        let tally = tally_on(tx.as_mut(), target, Some(user_id)).await?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(VoteResolution { action, kind: requested, tally })
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Id) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM votes
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn tally(&self, target: VoteTarget, user_id: Option<Id>) -> RepoResult<VoteTally> {
        let mut conn = self.pool.acquire().await.map_err(map_db_error)?;
        tally_on(conn.as_mut(), target, user_id).await
    }
}
