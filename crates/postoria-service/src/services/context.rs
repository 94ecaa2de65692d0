//! Service context - dependency container for services
//!
//! Holds the repository trait objects every service operates through. The
//! context carries no pool or connection handles; storage stays behind the
//! repository traits.

use std::sync::Arc;

use postoria_core::traits::{
    AnswerRepository, CommentRepository, FollowRepository, LikeRetweetRepository, PostRepository,
    UserRepository, VoteRepository,
};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    user_repo: Arc<dyn UserRepository>,
    post_repo: Arc<dyn PostRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    answer_repo: Arc<dyn AnswerRepository>,
    vote_repo: Arc<dyn VoteRepository>,
    like_retweet_repo: Arc<dyn LikeRetweetRepository>,
    follow_repo: Arc<dyn FollowRepository>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        post_repo: Arc<dyn PostRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        answer_repo: Arc<dyn AnswerRepository>,
        vote_repo: Arc<dyn VoteRepository>,
        like_retweet_repo: Arc<dyn LikeRetweetRepository>,
        follow_repo: Arc<dyn FollowRepository>,
    ) -> Self {
        Self {
            user_repo,
            post_repo,
            comment_repo,
            answer_repo,
            vote_repo,
            like_retweet_repo,
            follow_repo,
        }
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the post repository
    pub fn post_repo(&self) -> &dyn PostRepository {
        self.post_repo.as_ref()
    }

    /// Get the comment repository
    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    /// Get the answer repository
    pub fn answer_repo(&self) -> &dyn AnswerRepository {
        self.answer_repo.as_ref()
    }

    /// Get the vote repository
    pub fn vote_repo(&self) -> &dyn VoteRepository {
        self.vote_repo.as_ref()
    }

    /// Get the like/retweet repository
    pub fn like_retweet_repo(&self) -> &dyn LikeRetweetRepository {
        self.like_retweet_repo.as_ref()
    }

    /// Get the follow repository
    pub fn follow_repo(&self) -> &dyn FollowRepository {
        self.follow_repo.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    post_repo: Option<Arc<dyn PostRepository>>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
    answer_repo: Option<Arc<dyn AnswerRepository>>,
    vote_repo: Option<Arc<dyn VoteRepository>>,
    like_retweet_repo: Option<Arc<dyn LikeRetweetRepository>>,
    follow_repo: Option<Arc<dyn FollowRepository>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            user_repo: None,
            post_repo: None,
            comment_repo: None,
            answer_repo: None,
            vote_repo: None,
            like_retweet_repo: None,
            follow_repo: None,
        }
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn post_repo(mut self, repo: Arc<dyn PostRepository>) -> Self {
        self.post_repo = Some(repo);
        self
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn answer_repo(mut self, repo: Arc<dyn AnswerRepository>) -> Self {
        self.answer_repo = Some(repo);
        self
    }

    pub fn vote_repo(mut self, repo: Arc<dyn VoteRepository>) -> Self {
        self.vote_repo = Some(repo);
        self
    }

    pub fn like_retweet_repo(mut self, repo: Arc<dyn LikeRetweetRepository>) -> Self {
        self.like_retweet_repo = Some(repo);
        self
    }

    pub fn follow_repo(mut self, repo: Arc<dyn FollowRepository>) -> Self {
        self.follow_repo = Some(repo);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.post_repo
                .ok_or_else(|| ServiceError::validation("post_repo is required"))?,
            self.comment_repo
                .ok_or_else(|| ServiceError::validation("comment_repo is required"))?,
            self.answer_repo
                .ok_or_else(|| ServiceError::validation("answer_repo is required"))?,
            self.vote_repo
                .ok_or_else(|| ServiceError::validation("vote_repo is required"))?,
            self.like_retweet_repo
                .ok_or_else(|| ServiceError::validation("like_retweet_repo is required"))?,
            self.follow_repo
                .ok_or_else(|| ServiceError::validation("follow_repo is required"))?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
