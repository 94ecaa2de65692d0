//! Vote transition rules
//!
//! The state machine over (existing vote, requested kind) that keeps the
//! one-vote-per-user-per-target invariant. The policy differs by target kind:
//! comments and posts allow switching and toggling, answers reject a second
//! vote outright.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;
use crate::value_objects::{TargetKind, VoteKind};

/// Policy applied when a user who already voted votes again
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VotePolicy {
    /// Repeating the same kind removes the vote (toggle-off); a different
    /// kind updates the existing row in place (switch).
    SwitchOrToggle,
    /// Any second vote on the same target by the same user is rejected.
    RejectDuplicate,
}

impl VotePolicy {
    /// The policy for a given target kind
    pub fn for_target(kind: TargetKind) -> Self {
        match kind {
            TargetKind::Post | TargetKind::Comment => Self::SwitchOrToggle,
            TargetKind::Answer => Self::RejectDuplicate,
        }
    }
}

/// Outcome of applying a vote request to the current state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteAction {
    /// No vote existed; a new row is created
    Created,
    /// A vote of a different kind existed; its kind is updated in place
    Updated,
    /// A vote of the same kind existed; the row is deleted (toggle-off)
    Removed,
}

impl VoteAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Removed => "removed",
        }
    }

    /// Human-readable result message for API responses
    pub fn message(&self) -> &'static str {
        match self {
            Self::Created => "Vote created",
            Self::Updated => "Vote updated",
            Self::Removed => "Vote removed",
        }
    }
}

impl fmt::Display for VoteAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decide the transition for a vote request.
///
/// The three outcomes are mutually exclusive and exhaustive: given the current
/// state there is exactly one legal transition (or a policy rejection).
pub fn resolve_transition(
    existing: Option<VoteKind>,
    requested: VoteKind,
    policy: VotePolicy,
) -> Result<VoteAction, DomainError> {
    match (existing, policy) {
        (None, _) => Ok(VoteAction::Created),
        (Some(_), VotePolicy::RejectDuplicate) => Err(DomainError::AlreadyVoted),
        (Some(current), VotePolicy::SwitchOrToggle) if current == requested => {
            Ok(VoteAction::Removed)
        }
        (Some(_), VotePolicy::SwitchOrToggle) => Ok(VoteAction::Updated),
    }
}
