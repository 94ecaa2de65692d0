//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in
//! postoria-core. Each repository handles database operations for a specific
//! domain entity; the vote repository additionally owns the transactional
//! vote resolver.

mod answer;
mod comment;
mod error;
mod follow;
mod like_retweet;
mod post;
mod user;
mod vote;

pub use answer::PgAnswerRepository;
pub use comment::PgCommentRepository;
pub use follow::PgFollowRepository;
pub use like_retweet::PgLikeRetweetRepository;
pub use post::PgPostRepository;
pub use user::PgUserRepository;
pub use vote::PgVoteRepository;
