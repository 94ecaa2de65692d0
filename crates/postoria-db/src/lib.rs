//! # postoria-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `postoria-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - Repository implementations, including the transactional vote resolver
//!
//! The schema (see `migrations/`) carries the unique constraints that are the
//! authoritative guard for the one-reaction-per-user-per-target invariants;
//! the repositories' read-then-write logic is an optimization on top.

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use repositories::{
    PgAnswerRepository, PgCommentRepository, PgFollowRepository, PgLikeRetweetRepository,
    PgPostRepository, PgUserRepository, PgVoteRepository,
};
