//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. The services never open their own
//! connections; they receive these capabilities at construction time.

use async_trait::async_trait;

use crate::entities::{
    Answer, Comment, EngagementTally, Follow, LikeRetweet, Post, User, Vote, VoteTally,
};
use crate::error::DomainError;
use crate::value_objects::{EngagementKind, Id, VoteAction, VoteKind, VotePolicy, VoteTarget};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<User>>;

    /// Create a new user, returning the row with its assigned id.
    /// A duplicate username or email surfaces as the matching conflict error.
    async fn create(&self, user: &User) -> RepoResult<User>;

    /// List all users
    async fn list(&self) -> RepoResult<Vec<User>>;
}

// ============================================================================
// Post Repository
// ============================================================================

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find post by ID
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Post>>;

    /// Create a new post, returning the row with its assigned id
    async fn create(&self, post: &Post) -> RepoResult<Post>;

    /// List all posts, newest first
    async fn list(&self) -> RepoResult<Vec<Post>>;

    /// Delete a post; returns false if no such row existed
    async fn delete(&self, id: Id) -> RepoResult<bool>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find comment by ID
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Comment>>;

    /// List comments on a post, oldest first
    async fn find_by_post(&self, post_id: Id) -> RepoResult<Vec<Comment>>;

    /// Create a new comment, returning the row with its assigned id
    async fn create(&self, comment: &Comment) -> RepoResult<Comment>;

    /// Delete a comment; returns false if no such row existed
    async fn delete(&self, id: Id) -> RepoResult<bool>;
}

// ============================================================================
// Answer Repository
// ============================================================================

#[async_trait]
pub trait AnswerRepository: Send + Sync {
    /// Find answer by ID
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Answer>>;

    /// List answers on a post, oldest first
    async fn find_by_post(&self, post_id: Id) -> RepoResult<Vec<Answer>>;

    /// Create a new answer, returning the row with its assigned id
    async fn create(&self, answer: &Answer) -> RepoResult<Answer>;

    /// Delete an answer; returns false if no such row existed
    async fn delete(&self, id: Id) -> RepoResult<bool>;
}

// ============================================================================
// Vote Repository
// ============================================================================

/// Outcome of resolving a vote request, including the post-transition tally
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteResolution {
    /// Which transition was applied
    pub action: VoteAction,
    /// The requested kind the transition was resolved against
    pub kind: VoteKind,
    /// Counts recomputed after the transition, with the caller's own vote
    pub tally: VoteTally,
}

#[async_trait]
pub trait VoteRepository: Send + Sync {
    /// Find the vote a user holds on a target, if any
    async fn find(&self, target: VoteTarget, user_id: Id) -> RepoResult<Option<Vote>>;

    /// Find a vote by its own id
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Vote>>;

    /// List all votes on a target, oldest first
    async fn find_by_target(&self, target: VoteTarget) -> RepoResult<Vec<Vote>>;

    /// Apply one vote request atomically: read the existing vote, apply the
    /// transition decided by [`crate::value_objects::resolve_transition`],
    /// and recount - all within a single storage transaction. The unique
    /// constraint on (user, target) is the authoritative duplicate guard.
    async fn resolve(
        &self,
        target: VoteTarget,
        user_id: Id,
        requested: VoteKind,
        policy: VotePolicy,
    ) -> RepoResult<VoteResolution>;

    /// Delete a vote by its own id; returns false if no such row existed
    async fn delete(&self, id: Id) -> RepoResult<bool>;

    /// Count votes on a target by kind, plus the given user's own vote
    async fn tally(&self, target: VoteTarget, user_id: Option<Id>) -> RepoResult<VoteTally>;
}

// ============================================================================
// LikeRetweet Repository
// ============================================================================

#[async_trait]
pub trait LikeRetweetRepository: Send + Sync {
    /// Find the engagement row a user holds on a post for a kind, if any
    async fn find(
        &self,
        post_id: Id,
        user_id: Id,
        kind: EngagementKind,
    ) -> RepoResult<Option<LikeRetweet>>;

    /// List all engagement rows on a post, oldest first
    async fn find_by_post(&self, post_id: Id) -> RepoResult<Vec<LikeRetweet>>;

    /// Insert an engagement row, returning it with its assigned id.
    /// Fails with the "already reacted" conflict if the (post, user, kind)
    /// row exists; the unique constraint is the authoritative guard.
    async fn create(&self, like_retweet: &LikeRetweet) -> RepoResult<LikeRetweet>;

    /// Delete the engagement row for (post, user, kind); returns false if no
    /// such row existed
    async fn delete(&self, post_id: Id, user_id: Id, kind: EngagementKind) -> RepoResult<bool>;

    /// Count likes and retweets on a post, plus the given user's own state
    async fn tally(&self, post_id: Id, user_id: Option<Id>) -> RepoResult<EngagementTally>;
}

// ============================================================================
// Follow Repository
// ============================================================================

#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// Insert a follow edge, returning it with its assigned id.
    /// Fails with the "already following" conflict if the (follower,
    /// following) row exists; the unique constraint is the authoritative
    /// guard.
    async fn create(&self, follow: &Follow) -> RepoResult<Follow>;

    /// Delete the follow edge for (follower, following); returns false if no
    /// such row existed
    async fn delete(&self, follower_id: Id, following_id: Id) -> RepoResult<bool>;

    /// List the users who follow the given user
    async fn followers(&self, user_id: Id) -> RepoResult<Vec<User>>;

    /// List the users the given user follows
    async fn following(&self, user_id: Id) -> RepoResult<Vec<User>>;
}
