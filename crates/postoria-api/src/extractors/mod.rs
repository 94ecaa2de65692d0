//! Request extractors

mod path;
mod validated;

pub use path::IdPath;
pub use validated::ValidatedJson;
