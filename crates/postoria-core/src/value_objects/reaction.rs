//! Reaction kinds and targets
//!
//! A "reaction" is any user-to-target opinion signal: a directional vote
//! (upvote/downvote) on a post, comment, or answer, or a non-directional
//! engagement (like/retweet) on a post.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;
use crate::value_objects::Id;

/// Directional vote kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteKind {
    Upvote,
    Downvote,
}

impl VoteKind {
    /// Stable wire/database representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upvote => "upvote",
            Self::Downvote => "downvote",
        }
    }
}

impl fmt::Display for VoteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for VoteKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upvote" => Ok(Self::Upvote),
            "downvote" => Ok(Self::Downvote),
            other => Err(DomainError::InvalidReactionKind(other.to_string())),
        }
    }
}

/// Non-directional engagement kind on a post
///
/// Like and retweet are independent toggles, not mutually exclusive: a user
/// may hold both on the same post at the same time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngagementKind {
    Like,
    Retweet,
}

impl EngagementKind {
    /// Stable wire/database representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Retweet => "retweet",
        }
    }
}

impl fmt::Display for EngagementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EngagementKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "like" => Ok(Self::Like),
            "retweet" => Ok(Self::Retweet),
            other => Err(DomainError::InvalidReactionKind(other.to_string())),
        }
    }
}

/// Kind of entity a vote can be cast on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    Post,
    Comment,
    Answer,
}

impl TargetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Post => "post",
            Self::Comment => "comment",
            Self::Answer => "answer",
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A vote target: the entity being reacted to, identified by kind and row id
///
/// Not separately persisted - implicit in the vote table's foreign keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VoteTarget {
    pub kind: TargetKind,
    pub id: Id,
}

impl VoteTarget {
    pub const fn post(id: Id) -> Self {
        Self { kind: TargetKind::Post, id }
    }

    pub const fn comment(id: Id) -> Self {
        Self { kind: TargetKind::Comment, id }
    }

    pub const fn answer(id: Id) -> Self {
        Self { kind: TargetKind::Answer, id }
    }

    /// The "target does not exist" error for this target
    pub fn not_found(&self) -> DomainError {
        match self.kind {
            TargetKind::Post => DomainError::PostNotFound(self.id),
            TargetKind::Comment => DomainError::CommentNotFound(self.id),
            TargetKind::Answer => DomainError::AnswerNotFound(self.id),
        }
    }
}

impl fmt::Display for VoteTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.id)
    }
}
