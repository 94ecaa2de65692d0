//! Repository traits (ports) - the interface the domain requires of storage

mod repositories;

pub use repositories::{
    AnswerRepository, CommentRepository, FollowRepository, LikeRetweetRepository, PostRepository,
    RepoResult, UserRepository, VoteRepository, VoteResolution,
};
