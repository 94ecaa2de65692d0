//! Domain entities - core business objects

mod answer;
mod comment;
mod follow;
mod like_retweet;
mod post;
mod user;
mod vote;

pub use answer::Answer;
pub use comment::Comment;
pub use follow::Follow;
pub use like_retweet::{EngagementTally, LikeRetweet};
pub use post::{Post, PostType};
pub use user::User;
pub use vote::{Vote, VoteTally};
