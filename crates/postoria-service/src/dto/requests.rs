//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize`; bodies that carry free-form text
//! also implement `Validate`. Reaction kind fields arrive as strings and are
//! parsed at the service boundary, so an unknown kind is a 400 rather than a
//! deserialization failure.

use serde::Deserialize;
use validator::Validate;

use postoria_core::value_objects::Id;

// ============================================================================
// Reaction Requests
// ============================================================================

/// Cast a vote on a post, comment, or answer
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CastVoteRequest {
    pub user_id: Id,

    /// "upvote" or "downvote"
    #[serde(rename = "type")]
    pub vote_type: String,
}

/// Add a like or retweet to a post
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EngageRequest {
    pub user_id: Id,

    /// "like" or "retweet"
    #[serde(rename = "type")]
    pub engagement_type: String,
}

/// Query parameters for removing a like or retweet
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveEngagementQuery {
    pub user_id: Id,

    #[serde(rename = "type")]
    pub engagement_type: String,
}

/// Query parameters for reading engagement state
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngagementQuery {
    pub user_id: Option<Id>,
}

// ============================================================================
// User Requests
// ============================================================================

/// Create user request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[validate(length(min = 2, max = 32, message = "Username must be 2-32 characters"))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

/// Follow or unfollow a user; the user being followed is in the path
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FollowRequest {
    pub follower_id: Id,
}

// ============================================================================
// Post Requests
// ============================================================================

/// Create post request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub user_id: Id,

    #[validate(length(min = 1, max = 5000, message = "Content must be 1-5000 characters"))]
    pub content: String,

    /// "idea" or "forum"
    pub post_type: String,
}

// ============================================================================
// Comment / Answer Requests
// ============================================================================

/// Create comment request (comments attach to idea posts)
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    pub user_id: Id,

    #[validate(length(min = 1, max = 5000, message = "Content must be 1-5000 characters"))]
    pub content: String,
}

/// Create answer request (answers attach to forum posts)
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAnswerRequest {
    pub user_id: Id,

    #[validate(length(min = 1, max = 5000, message = "Content must be 1-5000 characters"))]
    pub content: String,
}
