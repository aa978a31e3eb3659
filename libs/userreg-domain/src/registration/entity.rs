//! Domain entities for user registration
//!
//! This module defines the core domain model for registrations in userreg.
//! A UserRecord represents an immutable snapshot of the data a caller
//! submits for registration.

use serde::{Deserialize, Serialize};

use crate::registration::ids::UserId;

/// A UserRecord is an immutable value describing one user to register
///
/// UserRecords are the fundamental unit of data in userreg. They are:
/// - **Immutable**: Once constructed, a record never changes
/// - **Caller-owned**: The domain borrows records, it never mutates or
///   consumes them
/// - **Unvalidated at construction**: Validation is a use-case concern,
///   applied by `RegistrationService`, not a constructor invariant
///
/// # Example
///
/// ```rust
/// use userreg_domain::registration::{UserId, UserRecord};
///
/// let record = UserRecord::new(UserId::new(1), "Alice", "alice@example.com");
/// println!("Registering {} <{}>", record.name(), record.email());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Caller-assigned identifier, no uniqueness enforced
    id: UserId,

    /// Display name, may be empty at construction
    name: String,

    /// Email address, unvalidated beyond emptiness
    email: String,
}

impl UserRecord {
    /// Create a new UserRecord with the given identifier, name and email
    ///
    /// This is a pure domain constructor - it performs no I/O and no
    /// validation. Empty names or emails are representable on purpose;
    /// rejecting them is the registration use case's decision.
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }

    /// Get the record's identifier
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Get the display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the email address
    pub fn email(&self) -> &str {
        &self.email
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_value_roundtrip() {
        let id = UserId::new(42);
        assert_eq!(id.value(), 42);
        assert_eq!(u64::from(id), 42);
        assert_eq!(UserId::from(42), id);
    }

    #[test]
    fn test_user_id_display() {
        let id = UserId::new(7);
        assert_eq!(format!("{}", id), "7");
    }

    #[test]
    fn test_record_construction() {
        let record = UserRecord::new(UserId::new(1), "Alice", "alice@example.com");

        assert_eq!(record.id(), UserId::new(1));
        assert_eq!(record.name(), "Alice");
        assert_eq!(record.email(), "alice@example.com");
    }

    #[test]
    fn test_record_allows_empty_fields() {
        // The entity accepts empty fields; the service rejects them.
        let record = UserRecord::new(UserId::new(2), "", "");

        assert!(record.name().is_empty());
        assert!(record.email().is_empty());
    }

    #[test]
    fn test_record_equality_is_structural() {
        let a = UserRecord::new(UserId::new(3), "Carol", "carol@example.com");
        let b = UserRecord::new(UserId::new(3), "Carol", "carol@example.com");

        assert_eq!(a, b);
    }
}
