//! User service

use tracing::{info, instrument};

use postoria_core::entities::User;
use postoria_core::error::DomainError;
use postoria_core::value_objects::Id;

use crate::dto::UserResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a user; username and email must be unique
    #[instrument(skip(self), fields(username = %username))]
    pub async fn create_user(&self, username: String, email: String) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .create(&User::new(username, email))
            .await?;

        info!(user_id = %user.id, "User created");
        Ok(user.into())
    }

    /// Get a user by id
    #[instrument(skip(self))]
    pub async fn get_user(&self, user_id: Id) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;
        Ok(user.into())
    }

    /// List all users
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> ServiceResult<Vec<UserResponse>> {
        let users = self.ctx.user_repo().list().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }
}
