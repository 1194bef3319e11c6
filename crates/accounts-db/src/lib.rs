//! # accounts-db
//!
//! Storage layer implementing the accounts-core repository traits.
//!
//! ## Overview
//!
//! - PostgreSQL via SQLx: connection pool, schema bootstrap, `FromRow`
//!   models and the `Pg*Repository` types
//! - An in-process `DashMap` backend (`Memory*Repository`) with the same
//!   semantics, for tests and embedding
//!
//! ## Usage
//!
//! ```rust,ignore
//! use accounts_db::pool::{apply_schema, create_pool, DatabaseConfig};
//! use accounts_db::repositories::PgUserRepository;
//! use accounts_core::traits::UserRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::new("postgres://localhost/accounts")).await?;
//!     apply_schema(&pool).await?;
//!     let user_repo = PgUserRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::{MemoryTokenRepository, MemoryUserRepository};
pub use pool::{apply_schema, create_pool, DatabaseConfig, PgPool};
pub use repositories::{PgTokenRepository, PgUserRepository};
