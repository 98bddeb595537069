//! Value objects - immutable types that represent domain concepts

mod ids;
mod role;

pub use ids::{MessageId, UserId};
pub use role::Role;
