//! Password hashing and verification utilities
//!
//! Uses Argon2id with a random per-password salt. Hashes are stored as PHC
//! strings, so the parameters used at hashing time travel with the hash and
//! verification does not depend on the service's current cost.
//!
//! Only PHC-formatted Argon2 hashes verify. A bcrypt hash (`$2a$`, `$2b$`)
//! is rejected as malformed.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};

use crate::error::AppError;

/// Argon2 iteration count applied to the seeded admin and to new accounts
pub const HASH_COST: u32 = 10;

/// Hash a password using Argon2id at [`HASH_COST`]
///
/// # Errors
/// Returns an error if hashing fails
pub fn hash_password(password: &str) -> Result<String, AppError> {
    PasswordService::new().hash(password)
}

/// Verify a password against a hash
///
/// # Errors
/// Returns an error if the hash is not a valid PHC string
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash format: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Password service for dependency injection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordService {
    t_cost: u32,
}

impl Default for PasswordService {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordService {
    /// Create a password service hashing at [`HASH_COST`]
    #[must_use]
    pub fn new() -> Self {
        Self { t_cost: HASH_COST }
    }

    /// Create a password service with a custom iteration count.
    ///
    /// Memory and parallelism stay at their defaults.
    ///
    /// # Errors
    /// Returns a validation error if `t_cost` is outside Argon2's accepted range
    pub fn with_cost(t_cost: u32) -> Result<Self, AppError> {
        params_for(t_cost)?;
        Ok(Self { t_cost })
    }

    /// Iteration count used for new hashes
    #[must_use]
    pub fn t_cost(&self) -> u32 {
        self.t_cost
    }

    fn hasher(&self) -> Result<Argon2<'static>, AppError> {
        let params = params_for(self.t_cost)?;
        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }

    /// Hash a password
    ///
    /// # Errors
    /// Returns an error if hashing fails
    pub fn hash(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);

        self.hasher()?
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {e}")))
    }

    /// Verify a password against a hash
    ///
    /// # Errors
    /// Returns an error if the hash is invalid
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, AppError> {
        verify_password(password, hash)
    }
}

fn params_for(t_cost: u32) -> Result<Params, AppError> {
    Params::new(
        Params::DEFAULT_M_COST,
        t_cost,
        Params::DEFAULT_P_COST,
        None,
    )
    .map_err(|e| AppError::Validation(format!("Invalid password hashing cost: {e}")))
}
