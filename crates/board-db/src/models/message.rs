//! Message database models

use chrono::NaiveDateTime;
use sqlx::FromRow;

/// Database model for the messages table
#[derive(Debug, Clone, FromRow)]
pub struct MessageModel {
    pub message_id: i32,
    /// `TIMESTAMP` without time zone, written by `DEFAULT NOW()`
    pub creation_date: NaiveDateTime,
    pub content: String,
}

/// Message joined through users_messages with its author
#[derive(Debug, Clone, FromRow)]
pub struct MessageWithAuthorModel {
    pub message_id: i32,
    pub content: String,
    pub creation_date: NaiveDateTime,
    pub first_name: String,
    pub last_name: String,
    pub role_name: String,
}
