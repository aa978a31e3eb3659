//! Ports (trait definitions) for external dependencies
//!
//! This module defines the contracts (ports) that external adapters must
//! implement. Following hexagonal architecture, the domain defines what it
//! needs, and the infrastructure provides implementations.
//!
//! ## Static Dispatch
//!
//! We use native Rust async traits with `impl Future` return types instead of
//! `async_trait` to ensure zero-cost abstractions and static dispatch.

use std::future::Future;

use crate::registration::{entity::UserRecord, error::RegistrationError};

/// Port for persisting user records
///
/// This trait abstracts away the storage backend (console, database, etc.).
/// Implementations must handle:
/// - Persisting a fully constructed UserRecord
/// - Converting infrastructure errors to domain errors
///
/// The gateway holds no domain state of its own; each `save` call is
/// independent. Implementations are `Send + Sync` so a single gateway can be
/// shared across tasks, though nothing in the domain requires concurrent
/// invocation.
pub trait StorageGateway: Send + Sync {
    /// Save a user record to the backing store
    ///
    /// The record arrives fully constructed and already validated by the
    /// registration use case; the gateway imposes no constraints of its own.
    ///
    /// # Errors
    ///
    /// Returns `RegistrationError::StorageFailure` if the storage operation
    /// fails. The reference console backend never fails, but the port is
    /// fallible so that real backends can report errors.
    fn save(
        &self,
        record: &UserRecord,
    ) -> impl Future<Output = Result<(), RegistrationError>> + Send;
}
