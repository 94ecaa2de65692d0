//! Follow entity - a directed follower relationship between two users

use chrono::{DateTime, Utc};

use crate::value_objects::Id;

/// Follow entity
///
/// At most one row per (follower, following) pair, and the two sides are
/// never the same user. Following is one-way; the reverse edge is a separate
/// row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Follow {
    pub id: Id,
    pub follower_id: Id,
    pub following_id: Id,
    pub created_at: DateTime<Utc>,
}

impl Follow {
    /// Create a new Follow (id assigned on insert)
    pub fn new(follower_id: Id, following_id: Id) -> Self {
        Self {
            id: Id::default(),
            follower_id,
            following_id,
            created_at: Utc::now(),
        }
    }
}
