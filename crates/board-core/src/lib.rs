//! # board-core
//!
//! Domain layer containing entities, value objects and repository traits for
//! the message board. This crate has zero dependencies on infrastructure
//! (database driver, password hashing, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{DeleteAck, Message, MessageWithAuthor, NewUser, User};
pub use error::DomainError;
pub use traits::{MessageRepository, RepoResult, UserRepository};
pub use value_objects::{MessageId, Role, UserId};
