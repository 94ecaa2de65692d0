//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Id;

/// Domain layer errors
///
/// Errors fall into four classes mirroring the HTTP mapping the API applies:
/// not-found (404), invalid-input (400), conflict (400), internal (500).
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Id),

    #[error("Post not found: {0}")]
    PostNotFound(Id),

    #[error("Comment not found: {0}")]
    CommentNotFound(Id),

    #[error("Answer not found: {0}")]
    AnswerNotFound(Id),

    #[error("Vote not found: {0}")]
    VoteNotFound(Id),

    #[error("Post not found or not {kind}d yet.")]
    ReactionNotFound { kind: &'static str },

    #[error("User to follow not found.")]
    FollowTargetNotFound(Id),

    #[error("You are not following this user.")]
    NotFollowing,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Invalid reaction type: {0}")]
    InvalidReactionKind(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Comments are only allowed on idea posts")]
    CommentsNotAllowed,

    #[error("Answers are only allowed on forum posts")]
    AnswersNotAllowed,

    #[error("You cannot follow yourself.")]
    SelfFollow,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("You have already voted on this answer.")]
    AlreadyVoted,

    #[error("Post already {kind}d.")]
    AlreadyReacted { kind: &'static str },

    #[error("Username already in use")]
    UsernameTaken,

    #[error("Email already in use")]
    EmailTaken,

    #[error("You are already following this user.")]
    AlreadyFollowing,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::PostNotFound(_) => "UNKNOWN_POST",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",
            Self::AnswerNotFound(_) => "UNKNOWN_ANSWER",
            Self::VoteNotFound(_) => "UNKNOWN_VOTE",
            Self::ReactionNotFound { .. } => "UNKNOWN_REACTION",
            Self::FollowTargetNotFound(_) => "UNKNOWN_USER",
            Self::NotFollowing => "NOT_FOLLOWING",

            // Validation
            Self::InvalidReactionKind(_) => "INVALID_REACTION_KIND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::CommentsNotAllowed => "COMMENTS_NOT_ALLOWED",
            Self::AnswersNotAllowed => "ANSWERS_NOT_ALLOWED",
            Self::SelfFollow => "SELF_FOLLOW",

            // Conflict
            Self::AlreadyVoted => "ALREADY_VOTED",
            Self::AlreadyReacted { .. } => "ALREADY_REACTED",
            Self::UsernameTaken => "USERNAME_TAKEN",
            Self::EmailTaken => "EMAIL_TAKEN",
            Self::AlreadyFollowing => "ALREADY_FOLLOWING",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::PostNotFound(_)
                | Self::CommentNotFound(_)
                | Self::AnswerNotFound(_)
                | Self::VoteNotFound(_)
                | Self::ReactionNotFound { .. }
                | Self::FollowTargetNotFound(_)
                | Self::NotFollowing
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidReactionKind(_)
                | Self::Validation(_)
                | Self::CommentsNotAllowed
                | Self::AnswersNotAllowed
                | Self::SelfFollow
        )
    }

    /// Check if this is a conflict error (policy forbids the operation)
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::AlreadyVoted
                | Self::AlreadyReacted { .. }
                | Self::UsernameTaken
                | Self::EmailTaken
                | Self::AlreadyFollowing
        )
    }
}
