//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in accounts-core.

mod error;
mod token;
mod user;

pub use token::PgTokenRepository;
pub use user::PgUserRepository;
