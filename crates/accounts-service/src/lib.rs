//! # accounts-service
//!
//! Application layer: user registration and one-time token use cases on top
//! of the repository traits.

pub mod dto;
pub mod services;

pub use dto::{IssueTokenRequest, RegisterUserRequest, UpdateUserRequest};
pub use services::{ServiceContext, TokenService, UserService};
