//! Post entity <-> model mapper

use postoria_core::entities::{Post, PostType};
use postoria_core::value_objects::Id;

use crate::models::PostModel;

/// Convert database post type string to PostType enum
///
/// Unknown values cannot occur because of the check constraint on the column;
/// the fallback keeps the conversion infallible.
fn parse_post_type(type_str: &str) -> PostType {
    match type_str {
        "forum" => PostType::Forum,
        _ => PostType::Idea,
    }
}

/// Convert PostType enum to database string
pub fn post_type_to_str(pt: PostType) -> &'static str {
    pt.as_str()
}

/// Convert PostModel to Post entity
impl From<PostModel> for Post {
    fn from(model: PostModel) -> Self {
        Post {
            id: Id::new(model.id),
            user_id: Id::new(model.user_id),
            content: model.content,
            post_type: parse_post_type(&model.post_type),
            created_at: model.created_at,
        }
    }
}
