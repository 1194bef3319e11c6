//! Database models - SQLx-compatible structs for PostgreSQL tables

mod token;
mod user;

pub use token::TokenModel;
pub use user::UserModel;
