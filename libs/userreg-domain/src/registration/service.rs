//! Registration service - Business logic orchestration
//!
//! This module contains the core business logic for user registration.
//! The service coordinates between the domain entity and the storage port.

use super::{RegistrationError, UserRecord};
use crate::ports::StorageGateway;

/// Service for registering users
///
/// This service encapsulates the business rules for registration:
/// - Validates the record (non-empty name, non-empty email)
/// - Delegates persistence to the storage gateway port
/// - Guarantees that an invalid record never reaches storage
///
/// ## Static Dispatch
///
/// The service is generic over any `StorageGateway` implementation.
/// The compiler will generate specialized versions for each concrete type,
/// resulting in zero-cost abstractions.
pub struct RegistrationService<G> {
    gateway: G,
}

impl<G> RegistrationService<G>
where
    G: StorageGateway,
{
    /// Create a new RegistrationService with the given storage gateway
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// Register a user record
    ///
    /// This is the main entry point for registration. It:
    /// 1. Validates the record according to business rules
    /// 2. Persists the record via the storage gateway
    ///
    /// Validation failures return before any storage call; the side effect
    /// only occurs once validation has passed, so there is nothing to roll
    /// back. Each call is independent: registering the same record twice
    /// saves it twice, no deduplication is performed.
    ///
    /// # Errors
    ///
    /// - `RegistrationError::EmptyName` if the display name is empty
    /// - `RegistrationError::EmptyEmail` if the email address is empty
    /// - `RegistrationError::StorageFailure` if the gateway fails to persist
    pub async fn register(&self, record: &UserRecord) -> Result<(), RegistrationError> {
        // Business rule: display name must not be empty
        if record.name().is_empty() {
            return Err(RegistrationError::EmptyName);
        }

        // Business rule: email address must not be empty
        if record.email().is_empty() {
            return Err(RegistrationError::EmptyEmail);
        }

        // Persist via gateway (infrastructure concern)
        self.gateway.save(record).await?;

        Ok(())
    }

    /// Get a reference to the injected gateway
    pub fn gateway(&self) -> &G {
        &self.gateway
    }
}
