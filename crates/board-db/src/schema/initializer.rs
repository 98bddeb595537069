//! One-shot schema initializer
//!
//! Creates the role type and tables, then seeds a single admin account, all
//! inside one transaction. A failure at any step rolls the whole run back.

use board_common::{AppError, ConfigError, DatabaseConfig, PasswordService, SeedConfig};
use board_core::{Role, UserId};
use sqlx::{PgConnection, PgPool};
use tracing::{debug, error, info, instrument, warn};

use crate::pool::create_pool;

use super::ddl::SCHEMA_STATEMENTS;

/// Fixed identity of the seeded administrator
#[derive(Debug, Clone, Copy)]
pub struct AdminAccount {
    pub username: &'static str,
    pub first_name: &'static str,
    pub last_name: &'static str,
}

pub const ADMIN_ACCOUNT: AdminAccount = AdminAccount {
    username: "Admin",
    first_name: "Admin",
    last_name: "User",
};

/// What the seed step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// No admin existed; one was inserted
    AdminCreated(UserId),
    /// An admin row was already present; nothing was inserted
    AdminAlreadyPresent,
}

/// Errors that abort the initializer
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Admin password hashing failed: {0}")]
    Password(#[source] AppError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Runs the schema setup against a pool it does not share with repositories
pub struct SchemaInitializer {
    pool: PgPool,
    passwords: PasswordService,
}

impl SchemaInitializer {
    pub fn new(pool: PgPool, passwords: PasswordService) -> Self {
        Self { pool, passwords }
    }

    /// Run the setup, reading the admin password from `ADMINPASS`
    pub async fn run(&self) -> Result<SeedOutcome, InitError> {
        self.run_with(SeedConfig::from_env).await
    }

    /// Run the setup with a custom source for the seed settings.
    ///
    /// `load_seed` is called after the schema statements, inside the
    /// transaction, so a missing password also rolls back the DDL.
    ///
    /// On failure a rollback is attempted. A rollback error is logged and
    /// dropped; the original error is returned.
    #[instrument(skip_all)]
    pub async fn run_with<F>(&self, load_seed: F) -> Result<SeedOutcome, InitError>
    where
        F: FnOnce() -> Result<SeedConfig, ConfigError>,
    {
        info!("Starting database setup");
        let mut tx = self.pool.begin().await?;

        let result = self.populate(&mut tx, load_seed).await;

        match result {
            Ok(outcome) => {
                tx.commit().await?;
                info!(?outcome, "Database populated");
                Ok(outcome)
            }
            Err(e) => {
                if let Err(rollback_err) = tx.rollback().await {
                    warn!(error = %rollback_err, "Rollback failed");
                }
                error!(error = %e, "Population failed");
                Err(e)
            }
        }
    }

    async fn populate<F>(
        &self,
        conn: &mut PgConnection,
        load_seed: F,
    ) -> Result<SeedOutcome, InitError>
    where
        F: FnOnce() -> Result<SeedConfig, ConfigError>,
    {
        for statement in &SCHEMA_STATEMENTS {
            sqlx::raw_sql(statement.sql).execute(&mut *conn).await?;
            debug!(name = statement.name, "Schema object ensured");
        }
        info!("Tables ensured");

        let seed = load_seed()?;
        let password_hash = self
            .passwords
            .hash(&seed.admin_password)
            .map_err(InitError::Password)?;

        let existing = sqlx::query_scalar::<_, i32>(
            r"
            SELECT id FROM users WHERE roleName = 'admin' LIMIT 1
            ",
        )
        .fetch_optional(&mut *conn)
        .await?;

        if let Some(admin_id) = existing {
            info!(admin_id, "Admin already exists, skipping insert");
            return Ok(SeedOutcome::AdminAlreadyPresent);
        }

        let admin_id = sqlx::query_scalar::<_, i32>(
            r"
            INSERT INTO users (username, firstName, lastName, password, roleName)
            VALUES ($1, $2, $3, $4, $5::roles)
            RETURNING id
            ",
        )
        .bind(ADMIN_ACCOUNT.username)
        .bind(ADMIN_ACCOUNT.first_name)
        .bind(ADMIN_ACCOUNT.last_name)
        .bind(&password_hash)
        .bind(Role::Admin.as_str())
        .fetch_one(&mut *conn)
        .await?;

        info!(admin_id, "Admin user created");
        Ok(SeedOutcome::AdminCreated(UserId::new(admin_id)))
    }
}

/// Open a dedicated pool, run the initializer once, and close the pool.
///
/// The pool is closed whether or not the run succeeded.
pub async fn initialize(
    config: &DatabaseConfig,
    passwords: PasswordService,
) -> Result<SeedOutcome, InitError> {
    let pool = create_pool(config).await.map_err(|e| {
        error!(error = %e, "Could not connect to PostgreSQL");
        e
    })?;

    let result = SchemaInitializer::new(pool.clone(), passwords).run().await;

    pool.close().await;
    debug!("Setup pool closed");

    result
}
