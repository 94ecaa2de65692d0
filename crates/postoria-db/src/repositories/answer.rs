//! PostgreSQL implementation of AnswerRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use postoria_core::entities::Answer;
use postoria_core::traits::{AnswerRepository, RepoResult};
use postoria_core::value_objects::Id;

use crate::models::AnswerModel;

use super::error::map_db_error;

/// PostgreSQL implementation of AnswerRepository
#[derive(Clone)]
pub struct PgAnswerRepository {
    pool: PgPool,
}

impl PgAnswerRepository {
    /// Create a new PgAnswerRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnswerRepository for PgAnswerRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Answer>> {
        let result = sqlx::query_as::<_, AnswerModel>(
            r#"
            SELECT id, post_id, user_id, content, created_at
            FROM answers
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Answer::from))
    }

    #[instrument(skip(self))]
    async fn find_by_post(&self, post_id: Id) -> RepoResult<Vec<Answer>> {
        let results = sqlx::query_as::<_, AnswerModel>(
            r#"
            SELECT id, post_id, user_id, content, created_at
            FROM answers
            WHERE post_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(post_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Answer::from).collect())
    }

    #[instrument(skip(self, answer), fields(post_id = %answer.post_id, user_id = %answer.user_id))]
    async fn create(&self, answer: &Answer) -> RepoResult<Answer> {
        let result = sqlx::query_as::<_, AnswerModel>(
            r#"
            INSERT INTO answers (post_id, user_id, content)
            VALUES ($1, $2, $3)
            RETURNING id, post_id, user_id, content, created_at
            "#,
        )
        .bind(answer.post_id.into_inner())
        .bind(answer.user_id.into_inner())
        .bind(&answer.content)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Answer::from(result))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Id) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM answers
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
