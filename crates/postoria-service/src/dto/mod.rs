//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    CastVoteRequest, CreateAnswerRequest, CreateCommentRequest, CreatePostRequest,
    CreateUserRequest, EngageRequest, EngagementQuery, FollowRequest, RemoveEngagementQuery,
};

// Re-export commonly used response types
pub use responses::{
    AnswerResponse, CastVoteResponse, CommentResponse, CreatedResponse,
    EngagementCreatedResponse, EngagementListResponse, FollowCreatedResponse, FollowResponse,
    HealthResponse, LikeRetweetResponse, LikeRetweetRowResponse, PostResponse, ReadinessResponse,
    UserResponse, UserSummaryResponse, VoteResponse, VoteResultBody,
};

// Re-export mapper helper structs
pub use mappers::{LikeRetweetWithUser, VoteWithUser};
