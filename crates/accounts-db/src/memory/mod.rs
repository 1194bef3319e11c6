//! In-process storage backend
//!
//! `DashMap`-backed implementations of the repository traits. Ids come from
//! an atomic sequence starting at 1, like a `BIGSERIAL` column. State lives
//! as long as the repository value and is never persisted.

mod token;
mod user;

pub use token::MemoryTokenRepository;
pub use user::MemoryUserRepository;
