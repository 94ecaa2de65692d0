//! Comment entity <-> model mapper

use postoria_core::entities::Comment;
use postoria_core::value_objects::Id;

use crate::models::CommentModel;

/// Convert CommentModel to Comment entity
impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: Id::new(model.id),
            post_id: Id::new(model.post_id),
            user_id: Id::new(model.user_id),
            content: model.content,
            created_at: model.created_at,
        }
    }
}
