//! Mappers converting domain entities to response DTOs

use postoria_core::entities::{Answer, Comment, Follow, LikeRetweet, Post, User, Vote};

use super::responses::{
    AnswerResponse, CommentResponse, FollowResponse, LikeRetweetResponse, LikeRetweetRowResponse,
    PostResponse, UserResponse, UserSummaryResponse, VoteResponse,
};

/// A vote row joined with its owner, for list responses
#[derive(Debug, Clone)]
pub struct VoteWithUser {
    pub vote: Vote,
    pub user: User,
}

impl From<VoteWithUser> for VoteResponse {
    fn from(row: VoteWithUser) -> Self {
        VoteResponse {
            id: row.vote.id,
            vote_type: row.vote.kind.as_str(),
            created_at: row.vote.created_at,
            user: UserSummaryResponse {
                user_id: row.user.id,
                username: row.user.username,
            },
        }
    }
}

/// A like/retweet row joined with its owner, for list responses
#[derive(Debug, Clone)]
pub struct LikeRetweetWithUser {
    pub row: LikeRetweet,
    pub user: User,
}

impl From<LikeRetweetWithUser> for LikeRetweetRowResponse {
    fn from(joined: LikeRetweetWithUser) -> Self {
        LikeRetweetRowResponse {
            id: joined.row.id,
            post_id: joined.row.post_id,
            user_id: joined.row.user_id,
            engagement_type: joined.row.kind.as_str(),
            created_at: joined.row.created_at,
            user: UserSummaryResponse {
                user_id: joined.user.id,
                username: joined.user.username,
            },
        }
    }
}

impl From<LikeRetweet> for LikeRetweetResponse {
    fn from(row: LikeRetweet) -> Self {
        LikeRetweetResponse {
            id: row.id,
            post_id: row.post_id,
            user_id: row.user_id,
            engagement_type: row.kind.as_str(),
            created_at: row.created_at,
        }
    }
}

impl From<Follow> for FollowResponse {
    fn from(follow: Follow) -> Self {
        FollowResponse {
            id: follow.id,
            follower_id: follow.follower_id,
            following_id: follow.following_id,
            created_at: follow.created_at,
        }
    }
}

impl From<User> for UserSummaryResponse {
    fn from(user: User) -> Self {
        UserSummaryResponse {
            user_id: user.id,
            username: user.username,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id,
            username: user.username,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        PostResponse {
            id: post.id,
            user_id: post.user_id,
            content: post.content,
            post_type: post.post_type.as_str(),
            created_at: post.created_at,
        }
    }
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        CommentResponse {
            id: comment.id,
            post_id: comment.post_id,
            user_id: comment.user_id,
            content: comment.content,
            created_at: comment.created_at,
        }
    }
}

impl From<Answer> for AnswerResponse {
    fn from(answer: Answer) -> Self {
        AnswerResponse {
            id: answer.id,
            post_id: answer.post_id,
            user_id: answer.user_id,
            content: answer.content,
            created_at: answer.created_at,
        }
    }
}
