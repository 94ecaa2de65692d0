//! LikeRetweet entity - a non-directional engagement on a post

use chrono::{DateTime, Utc};

use crate::value_objects::{EngagementKind, Id};

/// LikeRetweet entity
///
/// At most one row per (post, user, kind). Like and retweet rows for the same
/// user and post coexist; there is no switching between kinds, only add and
/// remove.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikeRetweet {
    pub id: Id,
    pub post_id: Id,
    pub user_id: Id,
    pub kind: EngagementKind,
    pub created_at: DateTime<Utc>,
}

impl LikeRetweet {
    /// Create a new LikeRetweet (id assigned on insert)
    pub fn new(post_id: Id, user_id: Id, kind: EngagementKind) -> Self {
        Self {
            id: Id::default(),
            post_id,
            user_id,
            kind,
            created_at: Utc::now(),
        }
    }
}

/// Aggregated engagement state for a post, for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngagementTally {
    pub like_count: i64,
    pub retweet_count: i64,
    /// Whether the requesting user holds a like on the post
    pub is_liked: bool,
    /// Whether the requesting user holds a retweet on the post
    pub is_retweeted: bool,
}
