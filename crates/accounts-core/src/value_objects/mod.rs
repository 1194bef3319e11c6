//! Value objects - immutable types that represent domain concepts

mod id;

pub use id::{IdParseError, TokenId, UserId};
