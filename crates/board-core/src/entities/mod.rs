//! Domain entities - core business objects

mod message;
mod user;

pub use message::{DeleteAck, Message, MessageWithAuthor};
pub use user::{NewUser, User};
