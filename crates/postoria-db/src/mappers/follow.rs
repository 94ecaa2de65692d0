//! Follow entity <-> model mapper

use postoria_core::entities::Follow;
use postoria_core::value_objects::Id;

use crate::models::FollowModel;

/// Convert FollowModel to Follow entity
impl From<FollowModel> for Follow {
    fn from(model: FollowModel) -> Self {
        Follow {
            id: Id::new(model.id),
            follower_id: Id::new(model.follower_id),
            following_id: Id::new(model.following_id),
            created_at: model.created_at,
        }
    }
}
