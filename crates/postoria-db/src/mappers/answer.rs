//! Answer entity <-> model mapper

use postoria_core::entities::Answer;
use postoria_core::value_objects::Id;

use crate::models::AnswerModel;

/// Convert AnswerModel to Answer entity
impl From<AnswerModel> for Answer {
    fn from(model: AnswerModel) -> Self {
        Answer {
            id: Id::new(model.id),
            post_id: Id::new(model.post_id),
            user_id: Id::new(model.user_id),
            content: model.content,
            created_at: model.created_at,
        }
    }
}
