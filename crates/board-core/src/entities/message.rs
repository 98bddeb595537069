//! Message entity - a piece of text posted to the board

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{MessageId, Role};

/// Message entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub created_at: DateTime<Utc>,
    pub content: String,
}

/// Message joined with the account that posted it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageWithAuthor {
    pub id: MessageId,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
}

impl MessageWithAuthor {
    /// Get the author's display name
    pub fn author_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Acknowledgement returned by a delete.
///
/// Deleting an unknown message is not an error, so this is returned either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteAck {
    pub deleted: bool,
}

impl DeleteAck {
    pub const fn new() -> Self {
        Self { deleted: true }
    }
}

impl Default for DeleteAck {
    fn default() -> Self {
        Self::new()
    }
}
