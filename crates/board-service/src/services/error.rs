//! Service layer error types
//!
//! Provides a unified error type for all service operations.

use board_common::AppError;
use board_core::DomainError;
use std::fmt;

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// Repository or domain rule failure, including database errors
    Domain(DomainError),

    /// Application error (password hashing, configuration)
    App(AppError),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(e) => write!(f, "{e}"),
            Self::App(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Domain(e) => Some(e),
            Self::App(e) => Some(e),
        }
    }
}

impl ServiceError {
    /// Get the error code for logs and callers
    pub fn error_code(&self) -> &str {
        match self {
            Self::Domain(e) => e.code(),
            Self::App(e) => e.error_code(),
        }
    }

    /// Check if the requested record does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Domain(e) if e.is_not_found())
    }

    /// Check if the failure came from the database
    pub fn is_database(&self) -> bool {
        matches!(self, Self::Domain(e) if e.is_database())
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<AppError> for ServiceError {
    fn from(err: AppError) -> Self {
        Self::App(err)
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Domain(e) => AppError::Domain(e),
            ServiceError::App(e) => e,
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;
    use board_core::UserId;

    #[test]
    fn test_not_found_error() {
        let err = ServiceError::from(DomainError::UserNotFound(UserId::new(123)));
        assert!(err.is_not_found());
        assert!(!err.is_database());
        assert_eq!(err.error_code(), "UNKNOWN_USER");
        assert_eq!(err.to_string(), "User not found: 123");
    }

    #[test]
    fn test_database_error_passthrough() {
        let err = ServiceError::from(DomainError::DatabaseError("deadlock".to_string()));
        assert!(err.is_database());
        assert_eq!(err.error_code(), "DATABASE_ERROR");
        assert_eq!(err.to_string(), "Database error: deadlock");
    }

    #[test]
    fn test_convert_to_app_error() {
        let app_err: AppError = ServiceError::from(DomainError::UserNotFound(UserId::new(1))).into();
        assert_eq!(app_err.error_code(), "UNKNOWN_USER");
    }
}
