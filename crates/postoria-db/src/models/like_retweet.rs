use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for like_retweets table
#[derive(Debug, Clone, FromRow)]
pub struct LikeRetweetModel {
    pub id: i64,
    pub post_id: i64,
    pub user_id: i64,
    pub kind: String,
    pub created_at: DateTime<Utc>,
}

/// Aggregated engagement counts for a post, from a `COUNT(*) FILTER` query
#[derive(Debug, Clone, FromRow)]
pub struct EngagementTallyModel {
    pub like_count: i64,
    pub retweet_count: i64,
    pub is_liked: bool,
    pub is_retweeted: bool,
}
