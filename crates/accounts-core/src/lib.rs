//! # accounts-core
//!
//! Domain layer containing the user and one-time token entities, their id
//! value objects, and the repository traits storage backends implement.
//! This crate has zero dependencies on infrastructure (database, runtime, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    generate_token_code, validate_user_id, NewToken, NewUser, Token, User, UserChanges,
    NAME_MAX_LEN, TOKEN_MAX_LEN,
};
pub use error::DomainError;
pub use traits::{RepoResult, TokenRepository, UserRepository};
pub use value_objects::{IdParseError, TokenId, UserId};
