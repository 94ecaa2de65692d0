//! PostgreSQL implementation of LikeRetweetRepository
//!
//! Likes and retweets are independent toggles. Creation goes through
//! `INSERT ... ON CONFLICT DO NOTHING RETURNING`, so the unique constraint on
//! (post, user, kind) decides duplicates; no row back means the user had
//! already reacted.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use postoria_core::entities::{EngagementTally, LikeRetweet};
use postoria_core::error::DomainError;
use postoria_core::traits::{LikeRetweetRepository, RepoResult};
use postoria_core::value_objects::{EngagementKind, Id};

use crate::models::{EngagementTallyModel, LikeRetweetModel};

use super::error::map_db_error;

/// PostgreSQL implementation of LikeRetweetRepository
#[derive(Clone)]
pub struct PgLikeRetweetRepository {
    pool: PgPool,
}

impl PgLikeRetweetRepository {
    /// Create a new PgLikeRetweetRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LikeRetweetRepository for PgLikeRetweetRepository {
    #[instrument(skip(self))]
    async fn find(
        &self,
        post_id: Id,
        user_id: Id,
        kind: EngagementKind,
    ) -> RepoResult<Option<LikeRetweet>> {
        let result = sqlx::query_as::<_, LikeRetweetModel>(
            r#"
            SELECT id, post_id, user_id, kind, created_at
            FROM like_retweets
            WHERE post_id = $1 AND user_id = $2 AND kind = $3
            "#,
        )
        .bind(post_id.into_inner())
        .bind(user_id.into_inner())
        .bind(kind.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(LikeRetweet::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_post(&self, post_id: Id) -> RepoResult<Vec<LikeRetweet>> {
        let results = sqlx::query_as::<_, LikeRetweetModel>(
            r#"
            SELECT id, post_id, user_id, kind, created_at
            FROM like_retweets
            WHERE post_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(post_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(LikeRetweet::try_from).collect()
    }

    #[instrument(skip(self, like_retweet), fields(
        post_id = %like_retweet.post_id,
        user_id = %like_retweet.user_id,
        kind = %like_retweet.kind,
    ))]
    async fn create(&self, like_retweet: &LikeRetweet) -> RepoResult<LikeRetweet> {
        let result = sqlx::query_as::<_, LikeRetweetModel>(
            r#"
            INSERT INTO like_retweets (post_id, user_id, kind)
            VALUES ($1, $2, $3)
            ON CONFLICT ON CONSTRAINT like_retweets_post_user_kind_key DO NOTHING
            RETURNING id, post_id, user_id, kind, created_at
            "#,
        )
        .bind(like_retweet.post_id.into_inner())
        .bind(like_retweet.user_id.into_inner())
        .bind(like_retweet.kind.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        match result {
            Some(model) => LikeRetweet::try_from(model),
            None => Err(DomainError::AlreadyReacted { kind: like_retweet.kind.as_str() }),
        }
    }

    #[instrument(skip(self))]
    async fn delete(&self, post_id: Id, user_id: Id, kind: EngagementKind) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM like_retweets
            WHERE post_id = $1 AND user_id = $2 AND kind = $3
            "#,
        )
        .bind(post_id.into_inner())
        .bind(user_id.into_inner())
        .bind(kind.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn tally(&self, post_id: Id, user_id: Option<Id>) -> RepoResult<EngagementTally> {
        let model = sqlx::query_as::<_, EngagementTallyModel>(
            r#"
            SELECT
                COUNT(*) FILTER (WHERE kind = 'like') AS like_count,
                COUNT(*) FILTER (WHERE kind = 'retweet') AS retweet_count,
                COALESCE(bool_or(kind = 'like' AND user_id = $2), false) AS is_liked,
                COALESCE(bool_or(kind = 'retweet' AND user_id = $2), false) AS is_retweeted
            FROM like_retweets
            WHERE post_id = $1
            "#,
        )
        .bind(post_id.into_inner())
        .bind(user_id.map(Id::into_inner))
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(EngagementTally {
            like_count: model.like_count,
            retweet_count: model.retweet_count,
            is_liked: model.is_liked,
            is_retweeted: model.is_retweeted,
        })
    }
}
