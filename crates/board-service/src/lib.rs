//! # board-service
//!
//! Application layer exposing the board operations: adding users, promoting
//! spectators, posting, deleting and listing messages.
//!
//! Services borrow a [`ServiceContext`] that owns the injected repositories,
//! so callers decide which pool (or test double) backs them.

pub mod services;

pub use services::{MessageService, ServiceContext, ServiceError, ServiceResult, UserService};
