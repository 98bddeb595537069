//! Repository traits

mod repositories;

pub use repositories::{MessageRepository, RepoResult, UserRepository};
