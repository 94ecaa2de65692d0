//! Model → entity mappers

mod answer;
mod comment;
mod follow;
mod like_retweet;
mod post;
mod user;
mod vote;

pub use post::post_type_to_str;
