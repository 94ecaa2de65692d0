//! PostgreSQL implementation of FollowRepository
//!
//! Creation goes through `INSERT ... ON CONFLICT DO NOTHING RETURNING`, so
//! the unique constraint on (follower, following) decides duplicates; no row
//! back means the edge already existed.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use postoria_core::entities::{Follow, User};
use postoria_core::error::DomainError;
use postoria_core::traits::{FollowRepository, RepoResult};
use postoria_core::value_objects::Id;

use crate::models::{FollowModel, UserModel};

use super::error::map_db_error;

/// PostgreSQL implementation of FollowRepository
#[derive(Clone)]
pub struct PgFollowRepository {
    pool: PgPool,
}

impl PgFollowRepository {
    /// Create a new PgFollowRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FollowRepository for PgFollowRepository {
    #[instrument(skip(self, follow), fields(
        follower_id = %follow.follower_id,
        following_id = %follow.following_id,
    ))]
    async fn create(&self, follow: &Follow) -> RepoResult<Follow> {
        let result = sqlx::query_as::<_, FollowModel>(
            r#"
            INSERT INTO follows (follower_id, following_id)
            VALUES ($1, $2)
            ON CONFLICT ON CONSTRAINT follows_follower_following_key DO NOTHING
            RETURNING id, follower_id, following_id, created_at
            "#,
        )
        .bind(follow.follower_id.into_inner())
        .bind(follow.following_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        match result {
            Some(model) => Ok(model.into()),
            None => Err(DomainError::AlreadyFollowing),
        }
    }

    #[instrument(skip(self))]
    async fn delete(&self, follower_id: Id, following_id: Id) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM follows
            WHERE follower_id = $1 AND following_id = $2
            "#,
        )
        .bind(follower_id.into_inner())
        .bind(following_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn followers(&self, user_id: Id) -> RepoResult<Vec<User>> {
        let results = sqlx::query_as::<_, UserModel>(
            r#"
            SELECT u.id, u.username, u.email, u.created_at
            FROM users u
            JOIN follows f ON f.follower_id = u.id
            WHERE f.following_id = $1
            ORDER BY f.created_at
            "#,
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(User::from).collect())
    }

    #[instrument(skip(self))]
    async fn following(&self, user_id: Id) -> RepoResult<Vec<User>> {
        let results = sqlx::query_as::<_, UserModel>(
            r#"
            SELECT u.id, u.username, u.email, u.created_at
            FROM users u
            JOIN follows f ON f.following_id = u.id
            WHERE f.follower_id = $1
            ORDER BY f.created_at
            "#,
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(User::from).collect())
    }
}
