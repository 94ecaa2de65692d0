//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance with migrations applied
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;

/// Create a user and return its id
async fn create_user(server: &TestServer) -> i64 {
    let request = CreateUserRequest::unique();
    let response = server.post("/users", &request).await.unwrap();
    let user: UserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    user.id
}

/// Create a post of the given type and return its id
async fn create_post(server: &TestServer, user_id: i64, post_type: &str) -> i64 {
    let request = match post_type {
        "forum" => CreatePostRequest::forum(user_id),
        _ => CreatePostRequest::idea(user_id),
    };
    let response = server.post("/posts", &request).await.unwrap();
    let post: PostResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    post.id
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_create_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateUserRequest::unique();

    let response = server.post("/users", &request).await.unwrap();
    let user: UserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(user.username, request.username);
    assert_eq!(user.email, request.email);
}

#[tokio::test]
async fn test_create_user_duplicate_username() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateUserRequest::unique();

    // First registration
    server.post("/users", &request).await.unwrap();

    // Second registration with same username
    let response = server.post("/users", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_get_user_not_found() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/users/999999999").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Post Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_get_post() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user_id = create_user(&server).await;

    let request = CreatePostRequest::idea(user_id);
    let response = server.post("/posts", &request).await.unwrap();
    let created: PostResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(created.user_id, user_id);
    assert_eq!(created.post_type, "idea");

    let response = server.get(&format!("/posts/{}", created.id)).await.unwrap();
    let post: PostResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(post.id, created.id);
    assert_eq!(post.content, request.content);
}

#[tokio::test]
async fn test_delete_post() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user_id = create_user(&server).await;
    let post_id = create_post(&server, user_id, "idea").await;

    let response = server.delete(&format!("/posts/{post_id}")).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get(&format!("/posts/{post_id}")).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Comment / Answer Tests
// ============================================================================

#[tokio::test]
async fn test_comment_on_idea_post() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user_id = create_user(&server).await;
    let post_id = create_post(&server, user_id, "idea").await;

    let request = CreateContentRequest::unique(user_id);
    let response = server
        .post(&format!("/posts/{post_id}/comments"), &request)
        .await
        .unwrap();
    let comment: ContentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(comment.post_id, post_id);
    assert_eq!(comment.user_id, user_id);
}

#[tokio::test]
async fn test_comment_on_forum_post_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user_id = create_user(&server).await;
    let post_id = create_post(&server, user_id, "forum").await;

    let request = CreateContentRequest::unique(user_id);
    let response = server
        .post(&format!("/posts/{post_id}/comments"), &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_answer_on_forum_post() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user_id = create_user(&server).await;
    let post_id = create_post(&server, user_id, "forum").await;

    let request = CreateContentRequest::unique(user_id);
    let response = server
        .post(&format!("/posts/{post_id}/answers"), &request)
        .await
        .unwrap();
    let answer: ContentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(answer.post_id, post_id);
}

#[tokio::test]
async fn test_answer_on_idea_post_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user_id = create_user(&server).await;
    let post_id = create_post(&server, user_id, "idea").await;

    let request = CreateContentRequest::unique(user_id);
    let response = server
        .post(&format!("/posts/{post_id}/answers"), &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Vote Tests
// ============================================================================

#[tokio::test]
async fn test_vote_create_toggle_switch_on_comment() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = create_user(&server).await;
    let voter = create_user(&server).await;
    let post_id = create_post(&server, author, "idea").await;

    let request = CreateContentRequest::unique(author);
    let response = server
        .post(&format!("/posts/{post_id}/comments"), &request)
        .await
        .unwrap();
    let comment: ContentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let path = format!("/comments/{}/votes", comment.id);

    // First upvote creates a row
    let response = server.post(&path, &CastVoteRequest::upvote(voter)).await.unwrap();
    let result: CastVoteResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(result.vote_result.action, "created");
    assert_eq!(result.upvotes, 1);
    assert_eq!(result.downvotes, 0);
    assert_eq!(result.user_vote.as_deref(), Some("upvote"));

    // Same kind again toggles it off
    let response = server.post(&path, &CastVoteRequest::upvote(voter)).await.unwrap();
    let result: CastVoteResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(result.vote_result.action, "removed");
    assert_eq!(result.upvotes, 0);
    assert_eq!(result.downvotes, 0);
    assert!(result.user_vote.is_none());

    // Downvote creates again, then an upvote switches in place
    let response = server.post(&path, &CastVoteRequest::downvote(voter)).await.unwrap();
    let result: CastVoteResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(result.vote_result.action, "created");
    assert_eq!(result.downvotes, 1);

    let response = server.post(&path, &CastVoteRequest::upvote(voter)).await.unwrap();
    let result: CastVoteResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(result.vote_result.action, "updated");
    assert_eq!(result.upvotes, 1);
    assert_eq!(result.downvotes, 0);
    assert_eq!(result.user_vote.as_deref(), Some("upvote"));
}

#[tokio::test]
async fn test_vote_tally_across_users() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = create_user(&server).await;
    let post_id = create_post(&server, author, "idea").await;
    let path = format!("/posts/{post_id}/votes");

    for _ in 0..2 {
        let voter = create_user(&server).await;
        let response = server.post(&path, &CastVoteRequest::upvote(voter)).await.unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }

    let downvoter = create_user(&server).await;
    let response = server.post(&path, &CastVoteRequest::downvote(downvoter)).await.unwrap();
    let result: CastVoteResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(result.upvotes, 2);
    assert_eq!(result.downvotes, 1);

    // Listing shows one row per voter with embedded user info
    let response = server.get(&path).await.unwrap();
    let votes: Vec<VoteRowResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(votes.len(), 3);
    assert!(votes.iter().any(|v| v.user.user_id == downvoter));
}

#[tokio::test]
async fn test_answer_vote_rejects_duplicate() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = create_user(&server).await;
    let voter = create_user(&server).await;
    let post_id = create_post(&server, author, "forum").await;

    let request = CreateContentRequest::unique(author);
    let response = server
        .post(&format!("/posts/{post_id}/answers"), &request)
        .await
        .unwrap();
    let answer: ContentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let path = format!("/answers/{}/votes", answer.id);

    let response = server.post(&path, &CastVoteRequest::upvote(voter)).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // Second vote by the same user is rejected regardless of kind
    let response = server.post(&path, &CastVoteRequest::downvote(voter)).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert!(error.error.contains("already voted"));
}

#[tokio::test]
async fn test_vote_invalid_kind() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = create_user(&server).await;
    let post_id = create_post(&server, author, "idea").await;

    let request = CastVoteRequest {
        user_id: author,
        vote_type: "sideways".to_string(),
    };
    let response = server
        .post(&format!("/posts/{post_id}/votes"), &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_vote_on_missing_target() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let voter = create_user(&server).await;

    let response = server
        .post("/posts/999999999/votes", &CastVoteRequest::upvote(voter))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_delete_vote() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = create_user(&server).await;
    let voter = create_user(&server).await;
    let post_id = create_post(&server, author, "idea").await;
    let path = format!("/posts/{post_id}/votes");

    let response = server.post(&path, &CastVoteRequest::upvote(voter)).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get(&path).await.unwrap();
    let votes: Vec<VoteRowResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    let vote_id = votes[0].id;

    let response = server.delete(&format!("/votes/{vote_id}")).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Deleting again is a 404
    let response = server.delete(&format!("/votes/{vote_id}")).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Like / Retweet Tests
// ============================================================================

#[tokio::test]
async fn test_like_and_retweet_coexist() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = create_user(&server).await;
    let user = create_user(&server).await;
    let post_id = create_post(&server, author, "idea").await;
    let path = format!("/posts/{post_id}/like-retweet");

    let response = server.post(&path, &EngageRequest::like(user)).await.unwrap();
    let created: EngagementCreatedResponse =
        assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.message, "Post liked successfully");
    assert_eq!(created.action.engagement_type, "like");

    let response = server.post(&path, &EngageRequest::retweet(user)).await.unwrap();
    let created: EngagementCreatedResponse =
        assert_json(response, StatusCode::CREATED).await.unwrap();
    // The suffix is a plain "d", so "retweet" becomes "retweetd" on the wire
    assert_eq!(created.message, "Post retweetd successfully");

    let response = server.get(&format!("{path}?userId={user}")).await.unwrap();
    let state: EngagementListResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(state.is_liked);
    assert!(state.is_retweeted);
    assert_eq!(state.like_count, 1);
    assert_eq!(state.retweet_count, 1);

    // List rows embed their owner just like vote listings do.
    assert_eq!(state.likes[0].user.user_id, user);
    assert!(!state.likes[0].user.username.is_empty());
    assert_eq!(state.retweets[0].user.user_id, user);
}

#[tokio::test]
async fn test_duplicate_like_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = create_user(&server).await;
    let user = create_user(&server).await;
    let post_id = create_post(&server, author, "idea").await;
    let path = format!("/posts/{post_id}/like-retweet");

    server.post(&path, &EngageRequest::like(user)).await.unwrap();

    let response = server.post(&path, &EngageRequest::like(user)).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error, "Post already liked.");
}

#[tokio::test]
async fn test_unlike_leaves_retweet() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = create_user(&server).await;
    let user = create_user(&server).await;
    let post_id = create_post(&server, author, "idea").await;
    let path = format!("/posts/{post_id}/like-retweet");

    server.post(&path, &EngageRequest::like(user)).await.unwrap();
    server.post(&path, &EngageRequest::retweet(user)).await.unwrap();

    let response = server
        .delete(&format!("{path}?userId={user}&type=like"))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get(&format!("{path}?userId={user}")).await.unwrap();
    let state: EngagementListResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!state.is_liked);
    assert!(state.is_retweeted);
}

#[tokio::test]
async fn test_remove_absent_engagement() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = create_user(&server).await;
    let user = create_user(&server).await;
    let post_id = create_post(&server, author, "idea").await;

    let response = server
        .delete(&format!(
            "/posts/{post_id}/like-retweet?userId={user}&type=retweet"
        ))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Follow Tests
// ============================================================================

#[tokio::test]
async fn test_follow_and_list_followers() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let followed = create_user(&server).await;
    let follower = create_user(&server).await;

    let response = server
        .post(
            &format!("/users/{followed}/follow"),
            &FollowRequest { follower_id: follower },
        )
        .await
        .unwrap();
    let created: FollowCreatedResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.message, "User followed successfully");
    assert_eq!(created.follow.follower_id, follower);
    assert_eq!(created.follow.following_id, followed);

    let response = server.get(&format!("/users/{followed}/followers")).await.unwrap();
    let followers: Vec<UserSummaryResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(followers.len(), 1);
    assert_eq!(followers[0].user_id, follower);

    let response = server.get(&format!("/users/{follower}/following")).await.unwrap();
    let following: Vec<UserSummaryResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(following.len(), 1);
    assert_eq!(following[0].user_id, followed);

    // The edge is one-way.
    let response = server.get(&format!("/users/{follower}/followers")).await.unwrap();
    let reverse: Vec<UserSummaryResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(reverse.is_empty());
}

#[tokio::test]
async fn test_self_follow_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = create_user(&server).await;

    let response = server
        .post(&format!("/users/{user}/follow"), &FollowRequest { follower_id: user })
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error, "You cannot follow yourself.");
}

#[tokio::test]
async fn test_duplicate_follow_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let followed = create_user(&server).await;
    let follower = create_user(&server).await;
    let path = format!("/users/{followed}/follow");

    server.post(&path, &FollowRequest { follower_id: follower }).await.unwrap();

    let response = server.post(&path, &FollowRequest { follower_id: follower }).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error, "You are already following this user.");
}

#[tokio::test]
async fn test_unfollow() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let followed = create_user(&server).await;
    let follower = create_user(&server).await;

    server
        .post(
            &format!("/users/{followed}/follow"),
            &FollowRequest { follower_id: follower },
        )
        .await
        .unwrap();

    let response = server
        .delete_json(
            &format!("/users/{followed}/unfollow"),
            &FollowRequest { follower_id: follower },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Unfollowing again is a 404.
    let response = server
        .delete_json(
            &format!("/users/{followed}/unfollow"),
            &FollowRequest { follower_id: follower },
        )
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error.error, "You are not following this user.");
}

#[tokio::test]
async fn test_follow_missing_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let follower = create_user(&server).await;

    let response = server
        .post("/users/99999999/follow", &FollowRequest { follower_id: follower })
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error.error, "User to follow not found.");
}
