//! User database model

use sqlx::FromRow;

/// Row shape returned by user queries.
///
/// Unquoted camel-case columns fold to lowercase in PostgreSQL, so queries
/// alias them to these snake-case names. The role enum is read as text.
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i32,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub role_name: String,
}
