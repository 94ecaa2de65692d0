//! Post entity - an idea or a forum topic

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;
use crate::value_objects::Id;

/// Kind of post, which gates what replies it accepts:
/// comments attach to ideas, answers attach to forum topics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostType {
    Idea,
    Forum,
}

impl PostType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idea => "idea",
            Self::Forum => "forum",
        }
    }
}

impl fmt::Display for PostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PostType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "idea" => Ok(Self::Idea),
            "forum" => Ok(Self::Forum),
            other => Err(DomainError::Validation(format!("unknown post type: {other}"))),
        }
    }
}

/// Post entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: Id,
    pub user_id: Id,
    pub content: String,
    pub post_type: PostType,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Create a new Post (id assigned on insert)
    pub fn new(user_id: Id, content: String, post_type: PostType) -> Self {
        Self {
            id: Id::default(),
            user_id,
            content,
            post_type,
            created_at: Utc::now(),
        }
    }

    /// Whether this post accepts comments
    #[inline]
    pub fn accepts_comments(&self) -> bool {
        self.post_type == PostType::Idea
    }

    /// Whether this post accepts answers
    #[inline]
    pub fn accepts_answers(&self) -> bool {
        self.post_type == PostType::Forum
    }
}
