//! User entity <-> model mapper

use postoria_core::entities::User;
use postoria_core::value_objects::Id;

use crate::models::UserModel;

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: Id::new(model.id),
            username: model.username,
            email: model.email,
            created_at: model.created_at,
        }
    }
}
