//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod answer;
pub mod comment;
pub mod context;
pub mod engagement;
pub mod error;
pub mod follow;
pub mod post;
pub mod tally;
pub mod user;
pub mod vote;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export all services for convenience
pub use answer::AnswerService;
pub use comment::CommentService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use engagement::EngagementService;
pub use error::{ServiceError, ServiceResult};
pub use follow::FollowService;
pub use post::PostService;
pub use tally::TallyService;
pub use user::UserService;
pub use vote::VoteService;
