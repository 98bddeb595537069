//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Every method maps to a single SQL statement
//! unless noted otherwise.

use async_trait::async_trait;

use crate::entities::{Message, MessageWithAuthor, NewUser, User};
use crate::error::DomainError;
use crate::value_objects::{MessageId, UserId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>>;

    /// Insert a user row with an already hashed password.
    ///
    /// `user.password` is ignored; only `password_hash` is stored.
    async fn create(&self, user: &NewUser, password_hash: &str) -> RepoResult<User>;

    /// Check whether any row has the admin role
    async fn admin_exists(&self) -> RepoResult<bool>;

    /// Promote a spectator to user.
    ///
    /// Returns `None` when the row does not exist or is not a spectator.
    async fn upgrade_role(&self, id: UserId) -> RepoResult<Option<User>>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: UserId) -> RepoResult<Option<String>>;
}

// ============================================================================
// Message Repository
// ============================================================================

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Insert a message without linking it to a user
    async fn create(&self, content: &str) -> RepoResult<Message>;

    /// Insert a message and its `users_messages` link in one transaction
    async fn create_for_user(&self, user_id: UserId, content: &str) -> RepoResult<Message>;

    /// Delete a message, cascading its links. Returns the number of rows removed.
    async fn delete(&self, id: MessageId) -> RepoResult<u64>;

    /// Content of every message, ascending by message ID
    async fn all_content(&self) -> RepoResult<Vec<String>>;

    /// Linked messages with their author, newest first
    async fn all_with_authors(&self) -> RepoResult<Vec<MessageWithAuthor>>;
}
