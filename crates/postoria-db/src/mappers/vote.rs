//! Vote entity <-> model mapper

use postoria_core::entities::Vote;
use postoria_core::error::DomainError;
use postoria_core::value_objects::{Id, VoteKind, VoteTarget};

use crate::models::VoteModel;

/// Convert VoteModel to Vote entity
///
/// Fails only on rows that violate the single-target check constraint or
/// carry an unknown kind, which the schema rules out.
impl TryFrom<VoteModel> for Vote {
    type Error = DomainError;

    fn try_from(model: VoteModel) -> Result<Self, Self::Error> {
        let target = match (model.post_id, model.comment_id, model.answer_id) {
            (Some(id), None, None) => VoteTarget::post(Id::new(id)),
            (None, Some(id), None) => VoteTarget::comment(Id::new(id)),
            (None, None, Some(id)) => VoteTarget::answer(Id::new(id)),
            _ => {
                return Err(DomainError::DatabaseError(format!(
                    "vote {} does not reference exactly one target",
                    model.id
                )))
            }
        };
        let kind: VoteKind = model.kind.parse()?;

        Ok(Vote {
            id: Id::new(model.id),
            user_id: Id::new(model.user_id),
            target,
            kind,
            created_at: model.created_at,
        })
    }
}
