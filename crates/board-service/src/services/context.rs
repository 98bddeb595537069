//! Service context - dependency container for services
//!
//! Holds the repositories and the password service. The pool behind the
//! repositories is created by the caller and injected here; nothing in this
//! crate owns a global pool.

use std::sync::Arc;

use board_common::PasswordService;
use board_core::traits::{MessageRepository, UserRepository};
use board_db::{PgMessageRepository, PgPool, PgUserRepository};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    user_repo: Arc<dyn UserRepository>,
    message_repo: Arc<dyn MessageRepository>,
    passwords: PasswordService,
}

impl ServiceContext {
    /// Create a new service context from explicit dependencies
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        message_repo: Arc<dyn MessageRepository>,
        passwords: PasswordService,
    ) -> Self {
        Self {
            user_repo,
            message_repo,
            passwords,
        }
    }

    /// Build PostgreSQL repositories sharing one pool
    pub fn from_pool(pool: PgPool, passwords: PasswordService) -> Self {
        Self::new(
            Arc::new(PgUserRepository::new(pool.clone())),
            Arc::new(PgMessageRepository::new(pool)),
            passwords,
        )
    }

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    pub fn message_repo(&self) -> &dyn MessageRepository {
        self.message_repo.as_ref()
    }

    pub fn passwords(&self) -> &PasswordService {
        &self.passwords
    }
}
