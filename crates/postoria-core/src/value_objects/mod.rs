//! Value objects - immutable types that represent domain concepts

mod id;
mod reaction;
mod transition;

pub use id::{Id, IdParseError};
pub use reaction::{EngagementKind, TargetKind, VoteKind, VoteTarget};
pub use transition::{resolve_transition, VoteAction, VotePolicy};
