//! Record identifiers
//!
//! Both users and tokens are keyed by a storage-assigned 64-bit integer.
//! Separate newtypes keep a token id from being passed where a user id is
//! expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error when parsing an id from its string representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IdParseError {
    #[error("invalid id format")]
    InvalidFormat,
}

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Create an id from a raw i64 value
            #[inline]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Get the inner i64 value
            #[inline]
            pub const fn into_inner(self) -> i64 {
                self.0
            }

            /// Storage assigns ids starting at 1, so anything else was never issued
            #[inline]
            pub const fn is_assigned(&self) -> bool {
                self.0 > 0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = IdParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim()
                    .parse::<i64>()
                    .map(Self)
                    .map_err(|_| IdParseError::InvalidFormat)
            }
        }
    };
}

record_id!(
    /// Primary key of a `users` row
    UserId
);

record_id!(
    /// Primary key of a `tokens` row
    TokenId
);
