use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for votes table
///
/// Exactly one of `post_id`, `comment_id`, `answer_id` is non-null, enforced
/// by the `votes_single_target` check constraint.
#[derive(Debug, Clone, FromRow)]
pub struct VoteModel {
    pub id: i64,
    pub user_id: i64,
    pub post_id: Option<i64>,
    pub comment_id: Option<i64>,
    pub answer_id: Option<i64>,
    pub kind: String,
    pub created_at: DateTime<Utc>,
}

/// Aggregated counts for a vote target, from a `COUNT(*) FILTER` query
#[derive(Debug, Clone, FromRow)]
pub struct VoteTallyModel {
    pub upvotes: i64,
    pub downvotes: i64,
    /// The requesting user's own vote kind, if they hold one
    pub user_vote: Option<String>,
}
