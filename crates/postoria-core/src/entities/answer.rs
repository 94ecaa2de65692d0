//! Answer entity - a reply on a forum topic

use chrono::{DateTime, Utc};

use crate::value_objects::Id;

/// Answer entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub id: Id,
    pub post_id: Id,
    pub user_id: Id,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Answer {
    /// Create a new Answer (id assigned on insert)
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
