//! Row identifiers
//!
//! Both tables use `SERIAL` keys, so identifiers are 32-bit signed integers
//! assigned by the database.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! serial_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Wrap a raw database identifier
            #[inline]
            pub const fn new(id: i32) -> Self {
                Self(id)
            }

            /// Get the inner i32 value
            #[inline]
            pub const fn into_inner(self) -> i32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<i32>().map(Self)
            }
        }
    };
}

serial_id!(
    /// Identifier of a row in `users`
    UserId
);

serial_id!(
    /// Identifier of a row in `messages`
    MessageId
);
