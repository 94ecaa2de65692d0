//! In-memory repository doubles for service tests
//!
//! A single [`InMemoryStore`] implements every repository trait over one
//! mutex-guarded state, so vote resolution is atomic the same way the real
//! transactional implementation is.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use postoria_core::entities::{
    Answer, Comment, EngagementTally, Follow, LikeRetweet, Post, PostType, User, Vote, VoteTally,
};
use postoria_core::error::DomainError;
use postoria_core::traits::{
    AnswerRepository, CommentRepository, FollowRepository, LikeRetweetRepository, PostRepository,
    RepoResult, UserRepository, VoteRepository, VoteResolution,
};
use postoria_core::value_objects::{
    resolve_transition, EngagementKind, Id, VoteAction, VoteKind, VotePolicy, VoteTarget,
};

use super::context::{ServiceContext, ServiceContextBuilder};

#[derive(Default)]
struct State {
    next_id: i64,
    users: HashMap<i64, User>,
    posts: HashMap<i64, Post>,
    comments: HashMap<i64, Comment>,
    answers: HashMap<i64, Answer>,
    votes: HashMap<i64, Vote>,
    like_retweets: HashMap<i64, LikeRetweet>,
    follows: HashMap<i64, Follow>,
}

impl State {
    fn assign_id(&mut self) -> Id {
        self.next_id += 1;
        Id::new(self.next_id)
    }

    fn vote_tally(&self, target: VoteTarget, user_id: Option<Id>) -> VoteTally {
        let mut tally = VoteTally::default();
        for vote in self.votes.values().filter(|v| v.target == target) {
            match vote.kind {
                VoteKind::Upvote => tally.upvotes += 1,
                VoteKind::Downvote => tally.downvotes += 1,
            }
            if Some(vote.user_id) == user_id {
                tally.user_vote = Some(vote.kind);
            }
        }
        tally
    }
}

/// In-memory implementation of all repository traits
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<User>> {
        let state = self.state.lock().unwrap();
        Ok(state.users.get(&id.into_inner()).cloned())
    }

    async fn create(&self, user: &User) -> RepoResult<User> {
        let mut state = self.state.lock().unwrap();
        if state.users.values().any(|u| u.username == user.username) {
            return Err(DomainError::UsernameTaken);
        }
        if state.users.values().any(|u| u.email == user.email) {
            return Err(DomainError::EmailTaken);
        }
        let mut created = user.clone();
        created.id = state.assign_id();
        created.created_at = Utc::now();
        state.users.insert(created.id.into_inner(), created.clone());
        Ok(created)
    }

    async fn list(&self) -> RepoResult<Vec<User>> {
        let state = self.state.lock().unwrap();
        let mut users: Vec<_> = state.users.values().cloned().collect();
        users.sort_by_key(|u| u.id);
        Ok(users)
    }
}

#[async_trait]
impl PostRepository for InMemoryStore {
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Post>> {
        let state = self.state.lock().unwrap();
        Ok(state.posts.get(&id.into_inner()).cloned())
    }

    async fn create(&self, post: &Post) -> RepoResult<Post> {
        let mut state = self.state.lock().unwrap();
        let mut created = post.clone();
        created.id = state.assign_id();
        state.posts.insert(created.id.into_inner(), created.clone());
        Ok(created)
    }

    async fn list(&self) -> RepoResult<Vec<Post>> {
        let state = self.state.lock().unwrap();
        let mut posts: Vec<_> = state.posts.values().cloned().collect();
        posts.sort_by_key(|p| std::cmp::Reverse(p.id));
        Ok(posts)
    }

    async fn delete(&self, id: Id) -> RepoResult<bool> {
        let mut state = self.state.lock().unwrap();
        Ok(state.posts.remove(&id.into_inner()).is_some())
    }
}

#[async_trait]
impl CommentRepository for InMemoryStore {
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Comment>> {
        let state = self.state.lock().unwrap();
        Ok(state.comments.get(&id.into_inner()).cloned())
    }

    async fn find_by_post(&self, post_id: Id) -> RepoResult<Vec<Comment>> {
        let state = self.state.lock().unwrap();
        let mut comments: Vec<_> = state
            .comments
            .values()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect();
        comments.sort_by_key(|c| c.id);
        Ok(comments)
    }

    async fn create(&self, comment: &Comment) -> RepoResult<Comment> {
        let mut state = self.state.lock().unwrap();
        let mut created = comment.clone();
        created.id = state.assign_id();
        state.comments.insert(created.id.into_inner(), created.clone());
        Ok(created)
    }

    async fn delete(&self, id: Id) -> RepoResult<bool> {
        let mut state = self.state.lock().unwrap();
        Ok(state.comments.remove(&id.into_inner()).is_some())
    }
}

#[async_trait]
impl AnswerRepository for InMemoryStore {
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Answer>> {
        let state = self.state.lock().unwrap();
        Ok(state.answers.get(&id.into_inner()).cloned())
    }

    async fn find_by_post(&self, post_id: Id) -> RepoResult<Vec<Answer>> {
        let state = self.state.lock().unwrap();
        let mut answers: Vec<_> = state
            .answers
            .values()
            .filter(|a| a.post_id == post_id)
            .cloned()
            .collect();
        answers.sort_by_key(|a| a.id);
        Ok(answers)
    }

    async fn create(&self, answer: &Answer) -> RepoResult<Answer> {
        let mut state = self.state.lock().unwrap();
        let mut created = answer.clone();
        created.id = state.assign_id();
        state.answers.insert(created.id.into_inner(), created.clone());
        Ok(created)
    }

    async fn delete(&self, id: Id) -> RepoResult<bool> {
        let mut state = self.state.lock().unwrap();
        Ok(state.answers.remove(&id.into_inner()).is_some())
    }
}

#[async_trait]
impl VoteRepository for InMemoryStore {
    async fn find(&self, target: VoteTarget, user_id: Id) -> RepoResult<Option<Vote>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .votes
            .values()
            .find(|v| v.target == target && v.user_id == user_id)
            .cloned())
    }

    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Vote>> {
        let state = self.state.lock().unwrap();
        Ok(state.votes.get(&id.into_inner()).cloned())
    }

    async fn find_by_target(&self, target: VoteTarget) -> RepoResult<Vec<Vote>> {
        let state = self.state.lock().unwrap();
        let mut votes: Vec<_> = state
            .votes
            .values()
            .filter(|v| v.target == target)
            .cloned()
            .collect();
        votes.sort_by_key(|v| v.id);
        Ok(votes)
    }

    async fn resolve(
        &self,
        target: VoteTarget,
        user_id: Id,
        requested: VoteKind,
        policy: VotePolicy,
    ) -> RepoResult<VoteResolution> {
        let mut state = self.state.lock().unwrap();

        let existing = state
            .votes
            .values()
            .find(|v| v.target == target && v.user_id == user_id)
            .map(|v| (v.id, v.kind));

        let action = resolve_transition(existing.map(|(_, kind)| kind), requested, policy)?;

        match (action, existing) {
            (VoteAction::Created, _) => {
                let id = state.assign_id();
                state.votes.insert(
                    id.into_inner(),
                    Vote {
                        id,
                        user_id,
                        target,
                        kind: requested,
                        created_at: Utc::now(),
                    },
                );
            }
            (VoteAction::Updated, Some((id, _))) => {
                if let Some(vote) = state.votes.get_mut(&id.into_inner()) {
                    vote.kind = requested;
                }
            }
            (VoteAction::Removed, Some((id, _))) => {
                state.votes.remove(&id.into_inner());
            }
            (VoteAction::Updated | VoteAction::Removed, None) => unreachable!(),
        }

        let tally = state.vote_tally(target, Some(user_id));
        Ok(VoteResolution { action, kind: requested, tally })
    }

    async fn delete(&self, id: Id) -> RepoResult<bool> {
        let mut state = self.state.lock().unwrap();
        Ok(state.votes.remove(&id.into_inner()).is_some())
    }

    async fn tally(&self, target: VoteTarget, user_id: Option<Id>) -> RepoResult<VoteTally> {
        let state = self.state.lock().unwrap();
        Ok(state.vote_tally(target, user_id))
    }
}

#[async_trait]
impl LikeRetweetRepository for InMemoryStore {
    async fn find(
        &self,
        post_id: Id,
        user_id: Id,
        kind: EngagementKind,
    ) -> RepoResult<Option<LikeRetweet>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .like_retweets
            .values()
            .find(|r| r.post_id == post_id && r.user_id == user_id && r.kind == kind)
            .cloned())
    }

    async fn find_by_post(&self, post_id: Id) -> RepoResult<Vec<LikeRetweet>> {
        let state = self.state.lock().unwrap();
        let mut rows: Vec<_> = state
            .like_retweets
            .values()
            .filter(|r| r.post_id == post_id)
            .cloned()
            .collect();
        rows.sort_by_key(|r| r.id);
        Ok(rows)
    }

    async fn create(&self, like_retweet: &LikeRetweet) -> RepoResult<LikeRetweet> {
        let mut state = self.state.lock().unwrap();
        let exists = state.like_retweets.values().any(|r| {
            r.post_id == like_retweet.post_id
                && r.user_id == like_retweet.user_id
                && r.kind == like_retweet.kind
        });
        if exists {
            return Err(DomainError::AlreadyReacted { kind: like_retweet.kind.as_str() });
        }
        let mut created = like_retweet.clone();
        created.id = state.assign_id();
        created.created_at = Utc::now();
        state
            .like_retweets
            .insert(created.id.into_inner(), created.clone());
        Ok(created)
    }

    async fn delete(&self, post_id: Id, user_id: Id, kind: EngagementKind) -> RepoResult<bool> {
        let mut state = self.state.lock().unwrap();
        let id = state
            .like_retweets
            .values()
            .find(|r| r.post_id == post_id && r.user_id == user_id && r.kind == kind)
            .map(|r| r.id.into_inner());
        Ok(match id {
            Some(id) => state.like_retweets.remove(&id).is_some(),
            None => false,
        })
    }

    async fn tally(&self, post_id: Id, user_id: Option<Id>) -> RepoResult<EngagementTally> {
        let state = self.state.lock().unwrap();
        let mut tally = EngagementTally::default();
        for row in state.like_retweets.values().filter(|r| r.post_id == post_id) {
            match row.kind {
                EngagementKind::Like => tally.like_count += 1,
                EngagementKind::Retweet => tally.retweet_count += 1,
            }
            if Some(row.user_id) == user_id {
                match row.kind {
                    EngagementKind::Like => tally.is_liked = true,
                    EngagementKind::Retweet => tally.is_retweeted = true,
                }
            }
        }
        Ok(tally)
    }
}

#[async_trait]
impl FollowRepository for InMemoryStore {
    async fn create(&self, follow: &Follow) -> RepoResult<Follow> {
        let mut state = self.state.lock().unwrap();
        let exists = state.follows.values().any(|f| {
            f.follower_id == follow.follower_id && f.following_id == follow.following_id
        });
        if exists {
            return Err(DomainError::AlreadyFollowing);
        }
        let mut created = follow.clone();
        created.id = state.assign_id();
        created.created_at = Utc::now();
        state.follows.insert(created.id.into_inner(), created.clone());
        Ok(created)
    }

    async fn delete(&self, follower_id: Id, following_id: Id) -> RepoResult<bool> {
        let mut state = self.state.lock().unwrap();
        let id = state
            .follows
            .values()
            .find(|f| f.follower_id == follower_id && f.following_id == following_id)
            .map(|f| f.id.into_inner());
        Ok(match id {
            Some(id) => state.follows.remove(&id).is_some(),
            None => false,
        })
    }

    async fn followers(&self, user_id: Id) -> RepoResult<Vec<User>> {
        let state = self.state.lock().unwrap();
        let mut edges: Vec<_> = state
            .follows
            .values()
            .filter(|f| f.following_id == user_id)
            .collect();
        edges.sort_by_key(|f| f.id);
        Ok(edges
            .into_iter()
            .filter_map(|f| state.users.get(&f.follower_id.into_inner()).cloned())
            .collect())
    }

    async fn following(&self, user_id: Id) -> RepoResult<Vec<User>> {
        let state = self.state.lock().unwrap();
        let mut edges: Vec<_> = state
            .follows
            .values()
            .filter(|f| f.follower_id == user_id)
            .collect();
        edges.sort_by_key(|f| f.id);
        Ok(edges
            .into_iter()
            .filter_map(|f| state.users.get(&f.following_id.into_inner()).cloned())
            .collect())
    }
}

/// Ids of the fixture rows created by [`seeded_context`]
pub struct SeededIds {
    pub author: Id,
    pub voter: Id,
    pub other_voter: Id,
    /// An idea post by `author`
    pub post: Id,
    /// A forum post by `author`
    pub forum_post: Id,
    /// A comment on `post`
    pub comment: Id,
    /// An answer on `forum_post`
    pub answer: Id,
}

/// A service context over a fresh in-memory store, seeded with three users,
/// an idea post with a comment, and a forum post with an answer
pub async fn seeded_context() -> (ServiceContext, SeededIds) {
    let store = Arc::new(InMemoryStore::new());

    let ctx = ServiceContextBuilder::new()
        .user_repo(store.clone())
        .post_repo(store.clone())
        .comment_repo(store.clone())
        .answer_repo(store.clone())
        .vote_repo(store.clone())
        .like_retweet_repo(store.clone())
        .follow_repo(store.clone())
        .build()
        .unwrap();

    let author = ctx
        .user_repo()
        .create(&User::new("author".to_string(), "author@example.com".to_string()))
        .await
        .unwrap();
    let voter = ctx
        .user_repo()
        .create(&User::new("voter".to_string(), "voter@example.com".to_string()))
        .await
        .unwrap();
    let other_voter = ctx
        .user_repo()
        .create(&User::new("other_voter".to_string(), "other@example.com".to_string()))
        .await
        .unwrap();

    let post = ctx
        .post_repo()
        .create(&Post::new(author.id, "an idea".to_string(), PostType::Idea))
        .await
        .unwrap();
    let forum_post = ctx
        .post_repo()
        .create(&Post::new(author.id, "a question".to_string(), PostType::Forum))
        .await
        .unwrap();

    let comment = ctx
        .comment_repo()
        .create(&Comment::new(post.id, author.id, "a comment".to_string()))
        .await
        .unwrap();
    let answer = ctx
        .answer_repo()
        .create(&Answer::new(forum_post.id, author.id, "an answer".to_string()))
        .await
        .unwrap();

    let ids = SeededIds {
        author: author.id,
        voter: voter.id,
        other_voter: other_voter.id,
        post: post.id,
        forum_post: forum_post.id,
        comment: comment.id,
        answer: answer.id,
    };

    (ctx, ids)
}
