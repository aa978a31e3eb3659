//! Domain errors for registration operations
//!
//! This module defines all possible errors that can occur during
//! registration. These are domain-level errors that abstract away
//! infrastructure details.

use thiserror::Error;

/// Errors that can occur during user registration
///
/// These errors represent business-level failures and are independent of
/// infrastructure implementation details (e.g., no I/O error types here).
///
/// Validation failures stay distinguishable from storage-layer failures;
/// `RegistrationService` guarantees that a validation failure never reaches
/// storage.
#[derive(Error, Debug)]
pub enum RegistrationError {
    /// The display name is empty
    #[error("Display name must not be empty")]
    EmptyName,

    /// The email address is empty
    #[error("Email address must not be empty")]
    EmptyEmail,

    /// The storage gateway failed to persist the record
    #[error("Storage operation failed: {0}")]
    StorageFailure(String),
}

impl RegistrationError {
    /// Create a storage failure error with a message
    pub fn storage_failure(msg: impl Into<String>) -> Self {
        Self::StorageFailure(msg.into())
    }

    /// Whether this error was raised by validation, before any storage call
    pub fn is_validation_failure(&self) -> bool {
        matches!(self, Self::EmptyName | Self::EmptyEmail)
    }
}

/// Result type alias for registration operations
pub type Result<T> = std::result::Result<T, RegistrationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_name_error() {
        let err = RegistrationError::EmptyName;
        assert_eq!(err.to_string(), "Display name must not be empty");
        assert!(err.is_validation_failure());
    }

    #[test]
    fn test_empty_email_error() {
        let err = RegistrationError::EmptyEmail;
        assert_eq!(err.to_string(), "Email address must not be empty");
        assert!(err.is_validation_failure());
    }

    #[test]
    fn test_storage_failure_error() {
        let err = RegistrationError::storage_failure("sink unavailable");
        assert!(matches!(err, RegistrationError::StorageFailure(_)));
        assert_eq!(err.to_string(), "Storage operation failed: sink unavailable");
        assert!(!err.is_validation_failure());
    }
}
