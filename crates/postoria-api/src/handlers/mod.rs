//! Request handlers organized by domain

pub mod answers;
pub mod comments;
pub mod engagement;
pub mod follows;
pub mod health;
pub mod posts;
pub mod users;
pub mod votes;
