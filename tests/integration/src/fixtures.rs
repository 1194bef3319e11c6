//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use std::sync::atomic::{AtomicU64, Ordering};

use accounts_core::UserId;
use accounts_service::{IssueTokenRequest, RegisterUserRequest};
use chrono::{DateTime, SubsecRound, Utc};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Current time at the precision PostgreSQL stores
pub fn db_now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Registration with a unique first name
pub fn unique_registration() -> RegisterUserRequest {
    let mut request = RegisterUserRequest::new(format!("Test{}", unique_suffix()), "User");
    request.joined_at = Some(db_now());
    request
}

/// Token request with a code derived from the suffix counter
pub fn unique_token_request(user_id: UserId) -> IssueTokenRequest {
    let mut request =
        IssueTokenRequest::new(user_id).with_code(format!("{:06}", unique_suffix() % 1_000_000));
    request.created_at = Some(db_now());
    request
}
