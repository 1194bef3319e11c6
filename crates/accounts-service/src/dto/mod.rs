//! Request DTOs accepted by the services

mod requests;

pub use requests::{IssueTokenRequest, RegisterUserRequest, UpdateUserRequest};
