//! Test fixtures and data generators
//!
//! Provides reusable request builders and response shapes for integration
//! tests. Field names mirror the camelCase wire format.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Create user request
#[derive(Debug, Serialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
}

impl CreateUserRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            username: format!("testuser{suffix}"),
            email: format!("test{suffix}@example.com"),
        }
    }
}

/// User response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub created_at: String,
}

/// Create post request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub user_id: i64,
    pub content: String,
    pub post_type: String,
}

impl CreatePostRequest {
    pub fn idea(user_id: i64) -> Self {
        let suffix = unique_suffix();
        Self {
            user_id,
            content: format!("Test idea post {suffix}"),
            post_type: "idea".to_string(),
        }
    }

    pub fn forum(user_id: i64) -> Self {
        let suffix = unique_suffix();
        Self {
            user_id,
            content: format!("Test forum post {suffix}"),
            post_type: "forum".to_string(),
        }
    }
}

/// Post response (creation responses carry an extra `message` field, which is
/// ignored here)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: i64,
    pub user_id: i64,
    pub content: String,
    pub post_type: String,
    pub created_at: String,
}

/// Create comment / answer request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContentRequest {
    pub user_id: i64,
    pub content: String,
}

impl CreateContentRequest {
    pub fn unique(user_id: i64) -> Self {
        let suffix = unique_suffix();
        Self {
            user_id,
            content: format!("Test content {suffix}"),
        }
    }
}

/// Comment / answer response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentResponse {
    pub id: i64,
    pub post_id: i64,
    pub user_id: i64,
    pub content: String,
    pub created_at: String,
}

/// Cast vote request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CastVoteRequest {
    pub user_id: i64,
    #[serde(rename = "type")]
    pub vote_type: String,
}

impl CastVoteRequest {
    pub fn upvote(user_id: i64) -> Self {
        Self {
            user_id,
            vote_type: "upvote".to_string(),
        }
    }

    pub fn downvote(user_id: i64) -> Self {
        Self {
            user_id,
            vote_type: "downvote".to_string(),
        }
    }
}

/// Cast vote response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CastVoteResponse {
    pub message: String,
    pub vote_result: VoteResultBody,
    pub upvotes: i64,
    pub downvotes: i64,
    pub user_vote: Option<String>,
}

/// The `voteResult` object inside a cast vote response
#[derive(Debug, Deserialize)]
pub struct VoteResultBody {
    pub action: String,
    #[serde(rename = "type")]
    pub vote_type: String,
}

/// A single vote row with its owner
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteRowResponse {
    pub id: i64,
    #[serde(rename = "type")]
    pub vote_type: String,
    pub created_at: String,
    pub user: UserSummaryResponse,
}

/// Embedded user info on reaction rows and follow listings
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummaryResponse {
    pub user_id: i64,
    pub username: String,
}

/// Add like / retweet request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngageRequest {
    pub user_id: i64,
    #[serde(rename = "type")]
    pub engagement_type: String,
}

impl EngageRequest {
    pub fn like(user_id: i64) -> Self {
        Self {
            user_id,
            engagement_type: "like".to_string(),
        }
    }

    pub fn retweet(user_id: i64) -> Self {
        Self {
            user_id,
            engagement_type: "retweet".to_string(),
        }
    }
}

/// Response for adding a like or retweet
#[derive(Debug, Deserialize)]
pub struct EngagementCreatedResponse {
    pub message: String,
    pub action: LikeRetweetResponse,
}

/// A single like or retweet row
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeRetweetResponse {
    pub id: i64,
    pub post_id: i64,
    pub user_id: i64,
    #[serde(rename = "type")]
    pub engagement_type: String,
    pub created_at: String,
}

/// A like or retweet row in a list response, with its owner embedded
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeRetweetRowResponse {
    pub id: i64,
    pub post_id: i64,
    pub user_id: i64,
    #[serde(rename = "type")]
    pub engagement_type: String,
    pub created_at: String,
    pub user: UserSummaryResponse,
}

/// Engagement state of a post
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngagementListResponse {
    pub likes: Vec<LikeRetweetRowResponse>,
    pub retweets: Vec<LikeRetweetRowResponse>,
    pub is_liked: bool,
    pub is_retweeted: bool,
    pub like_count: i64,
    pub retweet_count: i64,
}

/// Follow or unfollow request body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowRequest {
    pub follower_id: i64,
}

/// Response for following a user
#[derive(Debug, Deserialize)]
pub struct FollowCreatedResponse {
    pub message: String,
    pub follow: FollowResponse,
}

/// A follow edge row
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowResponse {
    pub id: i64,
    pub follower_id: i64,
    pub following_id: i64,
    pub created_at: String,
}

/// Error response body
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
