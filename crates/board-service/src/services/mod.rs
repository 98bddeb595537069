//! Business logic services

pub mod context;
pub mod error;
pub mod message;
pub mod user;

#[cfg(test)]
mod test_support;

pub use context::ServiceContext;
pub use error::{ServiceError, ServiceResult};
pub use message::MessageService;
pub use user::UserService;
