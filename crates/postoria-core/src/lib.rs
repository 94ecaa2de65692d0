//! # postoria-core
//!
//! Domain layer containing entities, value objects, repository traits, and the
//! reaction transition rules. This crate has zero dependencies on
//! infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Answer, Comment, EngagementTally, Follow, LikeRetweet, Post, PostType, User, Vote, VoteTally,
};
pub use error::DomainError;
pub use traits::{
    AnswerRepository, CommentRepository, FollowRepository, LikeRetweetRepository, PostRepository,
    RepoResult, UserRepository, VoteRepository, VoteResolution,
};
pub use value_objects::{
    resolve_transition, EngagementKind, Id, IdParseError, TargetKind, VoteAction, VoteKind,
    VotePolicy, VoteTarget,
};
