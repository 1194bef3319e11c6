//! Domain entities - core business objects

mod token;
mod user;

pub use token::{generate_token_code, validate_user_id, NewToken, Token, TOKEN_MAX_LEN};
pub use user::{NewUser, User, UserChanges, NAME_MAX_LEN};
