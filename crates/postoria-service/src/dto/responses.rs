//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Field names are
//! camelCase and ids serialize as JSON numbers, the wire format the frontend
//! was built against.

use chrono::{DateTime, Utc};
use serde::Serialize;

use postoria_core::value_objects::Id;

// ============================================================================
// Common Response Types
// ============================================================================

/// Creation response pairing a message with the created resource
#[derive(Debug, Serialize)]
pub struct CreatedResponse<T> {
    pub message: &'static str,
    #[serde(flatten)]
    pub body: T,
}

// ============================================================================
// Vote Responses
// ============================================================================

/// The `voteResult` object inside a cast-vote response
#[derive(Debug, Serialize)]
pub struct VoteResultBody {
    /// "created", "updated", or "removed"
    pub action: &'static str,
    /// The kind the request was resolved against
    #[serde(rename = "type")]
    pub vote_type: &'static str,
}

/// Response for casting a vote: the applied transition plus the fresh tally
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CastVoteResponse {
    pub message: &'static str,
    pub vote_result: VoteResultBody,
    pub upvotes: i64,
    pub downvotes: i64,
    /// The caller's vote after the transition, null when toggled off
    pub user_vote: Option<&'static str>,
}

/// Embedded user info on reaction and follow listings
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummaryResponse {
    pub user_id: Id,
    pub username: String,
}

/// A single vote row with its owner
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteResponse {
    pub id: Id,
    #[serde(rename = "type")]
    pub vote_type: &'static str,
    pub created_at: DateTime<Utc>,
    pub user: UserSummaryResponse,
}

// ============================================================================
// Engagement Responses
// ============================================================================

/// A single like or retweet row
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeRetweetResponse {
    pub id: Id,
    pub post_id: Id,
    pub user_id: Id,
    #[serde(rename = "type")]
    pub engagement_type: &'static str,
    pub created_at: DateTime<Utc>,
}

/// A like or retweet row with its owner, for list responses
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeRetweetRowResponse {
    pub id: Id,
    pub post_id: Id,
    pub user_id: Id,
    #[serde(rename = "type")]
    pub engagement_type: &'static str,
    pub created_at: DateTime<Utc>,
    pub user: UserSummaryResponse,
}

/// Response for adding a like or retweet: a message plus the created row
#[derive(Debug, Serialize)]
pub struct EngagementCreatedResponse {
    pub message: String,
    pub action: LikeRetweetResponse,
}

/// Engagement state of a post: the rows plus aggregate counts
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngagementListResponse {
    pub likes: Vec<LikeRetweetRowResponse>,
    pub retweets: Vec<LikeRetweetRowResponse>,
    pub is_liked: bool,
    pub is_retweeted: bool,
    pub like_count: i64,
    pub retweet_count: i64,
}

// ============================================================================
// Follow Responses
// ============================================================================

/// A follow edge row
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowResponse {
    pub id: Id,
    pub follower_id: Id,
    pub following_id: Id,
    pub created_at: DateTime<Utc>,
}

/// Response for following a user: a message plus the created edge
#[derive(Debug, Serialize)]
pub struct FollowCreatedResponse {
    pub message: &'static str,
    pub follow: FollowResponse,
}

// ============================================================================
// User / Post / Comment / Answer Responses
// ============================================================================

/// User response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Id,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Post response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: Id,
    pub user_id: Id,
    pub content: String,
    pub post_type: &'static str,
    pub created_at: DateTime<Utc>,
}

/// Comment response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: Id,
    pub post_id: Id,
    pub user_id: Id,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Answer response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerResponse {
    pub id: Id,
    pub post_id: Id,
    pub user_id: Id,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Readiness response including dependency checks
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: &'static str,
}
