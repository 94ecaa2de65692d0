//! LikeRetweet entity <-> model mapper

use postoria_core::entities::LikeRetweet;
use postoria_core::error::DomainError;
use postoria_core::value_objects::{EngagementKind, Id};

use crate::models::LikeRetweetModel;

/// Convert LikeRetweetModel to LikeRetweet entity
impl TryFrom<LikeRetweetModel> for LikeRetweet {
    type Error = DomainError;

    fn try_from(model: LikeRetweetModel) -> Result<Self, Self::Error> {
        let kind: EngagementKind = model.kind.parse()?;

        Ok(LikeRetweet {
            id: Id::new(model.id),
            post_id: Id::new(model.post_id),
            user_id: Id::new(model.user_id),
            kind,
            created_at: model.created_at,
        })
    }
}
