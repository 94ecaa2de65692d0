//! Vote entity - a directional opinion on a post, comment, or answer

use chrono::{DateTime, Utc};

use crate::value_objects::{Id, VoteKind, VoteTarget};

/// Vote entity
///
/// At most one vote row exists per (user, target) pair; switching kind updates
/// the row in place, keeping its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vote {
    pub id: Id,
    pub user_id: Id,
    pub target: VoteTarget,
    pub kind: VoteKind,
    pub created_at: DateTime<Utc>,
}

impl Vote {
    /// Create a new Vote (id assigned on insert)
    pub fn new(target: VoteTarget, user_id: Id, kind: VoteKind) -> Self {
        Self {
            id: Id::default(),
            user_id,
            target,
            kind,
            created_at: Utc::now(),
        }
    }
}

/// Aggregated vote counts for a target, for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VoteTally {
    pub upvotes: i64,
    pub downvotes: i64,
    /// The requesting user's own vote, if any
    pub user_vote: Option<VoteKind>,
}

impl VoteTally {
    pub fn new(upvotes: i64, downvotes: i64, user_vote: Option<VoteKind>) -> Self {
        Self { upvotes, downvotes, user_vote }
    }
}
