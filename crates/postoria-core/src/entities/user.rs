//! User entity - a registered account that owns posts and reactions

use chrono::{DateTime, Utc};

use crate::value_objects::Id;

/// User entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Id,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with required fields (id assigned on insert)
    pub fn new(username: String, email: String) -> Self {
        Self {
            id: Id::default(),
            username,
            email,
            created_at: Utc::now(),
        }
    }
}
