//! Business logic services
//!
//! Services apply defaults (current time, generated codes), check the
//! user reference of tokens, and delegate storage to the repositories.

use chrono::{DateTime, SubsecRound, Utc};

pub mod context;
pub mod token;
pub mod user;

// Re-export all services for convenience
pub use context::ServiceContext;
pub use token::TokenService;
pub use user::UserService;

/// Current time at the microsecond precision PostgreSQL stores
pub(crate) fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}
