//! # postoria-service
//!
//! Application layer containing business logic, services, and DTOs.
//!
//! Services receive their dependencies through [`services::ServiceContext`],
//! which holds only repository trait objects. This keeps the layer testable
//! against in-memory doubles and free of storage concerns.

pub mod dto;
pub mod services;

pub use services::{
    AnswerService, CommentService, EngagementService, FollowService, PostService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, TallyService, UserService, VoteService,
};
