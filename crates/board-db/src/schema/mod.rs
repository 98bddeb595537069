//! Schema creation and admin seeding
//!
//! Everything here runs once per process on its own short-lived pool, never
//! on the pool used by the repositories.

mod ddl;
mod initializer;

pub use ddl::{SchemaStatement, SCHEMA_STATEMENTS};
pub use initializer::{
    initialize, AdminAccount, InitError, SchemaInitializer, SeedOutcome, ADMIN_ACCOUNT,
};
