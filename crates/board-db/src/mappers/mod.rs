//! Model to entity mappers
//!
//! - `TryFrom<UserModel> for User`: the role column is text and must parse
//! - `From<MessageModel> for Message`: naive timestamps are read as UTC

mod message;
mod user;
