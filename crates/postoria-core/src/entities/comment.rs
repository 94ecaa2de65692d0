//! Comment entity - a reply on an idea post

use chrono::{DateTime, Utc};

use crate::value_objects::Id;

/// Comment entity
///
/// Vote counts for a comment are always aggregated from the vote table, never
/// stored on the comment row itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: Id,
    pub post_id: Id,
    pub user_id: Id,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new Comment (id assigned on insert)
    pub fn new(post_id: Id, user_id: Id, content: String) -> Self {
        Self {
            id: Id::default(),
            post_id,
            user_id,
            content,
            created_at: Utc::now(),
        }
    }
}
