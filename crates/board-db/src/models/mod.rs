//! Database models - SQLx-compatible structs for PostgreSQL rows

mod message;
mod user;

pub use message::{MessageModel, MessageWithAuthorModel};
pub use user::UserModel;
