//! Route definitions
//!
//! All API routes organized by domain.

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::handlers::{answers, comments, engagement, follows, health, posts, users, votes};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health, which is
/// mounted separately to bypass rate limiting)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(user_routes())
        .merge(post_routes())
        .merge(comment_routes())
        .merge(answer_routes())
        .merge(vote_routes())
        .merge(engagement_routes())
        .merge(follow_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(users::create_user))
        .route("/users", get(users::list_users))
        .route("/users/:user_id", get(users::get_user))
}

/// Post routes
fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/posts", post(posts::create_post))
        .route("/posts", get(posts::list_posts))
        .route("/posts/:post_id", get(posts::get_post))
        .route("/posts/:post_id", delete(posts::delete_post))
}

/// Comment routes
fn comment_routes() -> Router<AppState> {
    Router::new()
        .route("/posts/:post_id/comments", post(comments::create_comment))
        .route("/posts/:post_id/comments", get(comments::list_comments))
        .route("/comments/:comment_id", delete(comments::delete_comment))
}

/// Answer routes
fn answer_routes() -> Router<AppState> {
    Router::new()
        .route("/posts/:post_id/answers", post(answers::create_answer))
        .route("/posts/:post_id/answers", get(answers::list_answers))
        .route("/answers/:answer_id", delete(answers::delete_answer))
}

/// Vote routes
fn vote_routes() -> Router<AppState> {
    Router::new()
        .route("/posts/:post_id/votes", post(votes::cast_post_vote))
        .route("/posts/:post_id/votes", get(votes::list_post_votes))
        .route("/comments/:comment_id/votes", post(votes::cast_comment_vote))
        .route("/comments/:comment_id/votes", get(votes::list_comment_votes))
        .route("/answers/:answer_id/votes", post(votes::cast_answer_vote))
        .route("/answers/:answer_id/votes", get(votes::list_answer_votes))
        .route("/votes/:vote_id", delete(votes::delete_vote))
}

/// Like/retweet routes
fn engagement_routes() -> Router<AppState> {
    Router::new()
        .route("/posts/:post_id/like-retweet", post(engagement::add_engagement))
        .route("/posts/:post_id/like-retweet", delete(engagement::remove_engagement))
        .route("/posts/:post_id/like-retweet", get(engagement::get_engagement))
}

/// Follow routes
fn follow_routes() -> Router<AppState> {
    Router::new()
        .route("/users/:user_id/follow", post(follows::follow_user))
        .route("/users/:user_id/unfollow", delete(follows::unfollow_user))
        .route("/users/:user_id/followers", get(follows::list_followers))
        .route("/users/:user_id/following", get(follows::list_following))
}
