//! Account role - mirrors the `roles` enum type in PostgreSQL

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Closed set of account roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Board administrator, seeded once by the schema initializer
    Admin,
    /// Promoted account allowed to post
    User,
    /// Newly registered account
    #[default]
    Spectator,
}

impl Role {
    /// All roles in declaration order of the database enum
    pub const ALL: [Role; 3] = [Role::Admin, Role::User, Role::Spectator];

    /// Label stored in the `roles` enum
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
            Self::Spectator => "spectator",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "user" => Ok(Self::User),
            "spectator" => Ok(Self::Spectator),
            other => Err(DomainError::InvalidRole(other.to_string())),
        }
    }
}
