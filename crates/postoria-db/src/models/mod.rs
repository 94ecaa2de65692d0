//! Database models - rows as SQLx sees them

mod answer;
mod comment;
mod follow;
mod like_retweet;
mod post;
mod user;
mod vote;

pub use answer::AnswerModel;
pub use comment::CommentModel;
pub use follow::FollowModel;
pub use like_retweet::{EngagementTallyModel, LikeRetweetModel};
pub use post::PostModel;
pub use user::UserModel;
pub use vote::{VoteModel, VoteTallyModel};
