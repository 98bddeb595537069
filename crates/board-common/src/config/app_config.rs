//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file when present).

use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Environment variable holding the connection string
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

/// Environment variable holding the seeded administrator's plaintext password
pub const ADMIN_PASSWORD_VAR: &str = "ADMINPASS";

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseConfig,
}

/// General application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub name: String,
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "production" => Ok(Self::Production),
            "staging" => Ok(Self::Staging),
            "development" => Ok(Self::Development),
            _ => Err(ConfigError::InvalidValue("APP_ENV", s.to_string())),
        }
    }
}

/// Database configuration for a connection pool
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL
    pub url: String,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// Minimum number of connections to maintain
    pub min_connections: u32,
    /// Maximum time to wait for a connection
    pub acquire_timeout: Duration,
    /// Maximum idle time before a connection is closed
    pub idle_timeout: Duration,
    /// Maximum lifetime of a connection
    pub max_lifetime: Duration,
}

impl DatabaseConfig {
    /// Pool settings for the given URL with default sizing
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            acquire_timeout: Duration::from_secs(10),
            idle_timeout: Duration::from_secs(300),
            max_lifetime: Duration::from_secs(1800),
        }
    }

    /// Settings for the one-shot schema setup pool.
    ///
    /// The whole setup runs on one transaction, so a single connection is enough
    /// and none is kept warm.
    pub fn for_setup(url: impl Into<String>) -> Self {
        Self {
            max_connections: 1,
            min_connections: 0,
            ..Self::with_url(url)
        }
    }
}

/// Settings for the schema setup binary.
///
/// Only the connection string is required. Pool sizing comes from
/// [`DatabaseConfig::for_setup`], and an unrecognized `APP_ENV` falls back to
/// the default environment instead of aborting the run.
#[derive(Debug, Clone)]
pub struct SetupConfig {
    pub database: DatabaseConfig,
    pub env: Environment,
    /// `APP_ENV` value that was not recognized and was replaced by the default
    pub rejected_env: Option<String>,
}

impl SetupConfig {
    /// Resolve setup settings, letting an explicit URL take precedence over
    /// `DATABASE_URL`. An empty URL counts as absent.
    ///
    /// `.env` is not loaded here; the caller loads it before parsing arguments.
    ///
    /// # Errors
    /// Returns an error if neither the override nor `DATABASE_URL` is set
    pub fn from_env_with_url(url: Option<String>) -> Result<Self, ConfigError> {
        Self::from_lookup(url, |key| env::var(key).ok())
    }

    fn from_lookup<F>(url: Option<String>, var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = resolve_database_url(url, &var)?;

        let (env, rejected_env) = match parse_var::<Environment, _>(&var, "APP_ENV") {
            Ok(env) => (env.unwrap_or_default(), None),
            Err(ConfigError::InvalidValue(_, value)) => (Environment::default(), Some(value)),
            Err(e) => return Err(e),
        };

        Ok(Self {
            database: DatabaseConfig::for_setup(url),
            env,
            rejected_env,
        })
    }
}

/// Settings consumed only by the schema initializer
#[derive(Clone)]
pub struct SeedConfig {
    /// Plaintext password for the seeded admin account
    pub admin_password: String,
}

impl fmt::Debug for SeedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeedConfig")
            .field("admin_password", &"[REDACTED]")
            .finish()
    }
}

impl SeedConfig {
    /// Load seed settings from environment variables.
    ///
    /// Reads the process environment as-is; `.env` is loaded by the binary.
    ///
    /// # Errors
    /// Returns an error if `ADMINPASS` is missing
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let admin_password = var(ADMIN_PASSWORD_VAR)
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingVar(ADMIN_PASSWORD_VAR))?;

        Ok(Self { admin_password })
    }
}

// Default value functions
fn default_app_name() -> String {
    "message-board".to_string()
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn resolve_database_url<F>(url: Option<String>, var: &F) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    url.filter(|s| !s.is_empty())
        .or_else(|| var(DATABASE_URL_VAR))
        .filter(|s| !s.is_empty())
        .ok_or(ConfigError::MissingVar(DATABASE_URL_VAR))
}

fn parse_var<T, F>(var: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    var(key)
        .map(|s| s.parse().map_err(|_| ConfigError::InvalidValue(key, s)))
        .transpose()
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = resolve_database_url(None, &var)?;

        let mut database = DatabaseConfig::with_url(url);
        if let Some(max) = parse_var(&var, "DATABASE_MAX_CONNECTIONS")? {
            database.max_connections = max;
        }
        if let Some(min) = parse_var(&var, "DATABASE_MIN_CONNECTIONS")? {
            database.min_connections = min;
        }

        Ok(Self {
            app: AppSettings {
                name: var("APP_NAME").unwrap_or_else(default_app_name),
                env: parse_var(&var, "APP_ENV")?.unwrap_or_default(),
            },
            database,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
