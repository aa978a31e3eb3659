//! # Userreg Domain Layer
//!
//! This crate contains the pure business logic and domain models for the
//! userreg registration example. It follows hexagonal architecture principles:
//!
//! - **Entities**: Core domain models (UserRecord)
//! - **Ports**: Trait definitions for external dependencies (StorageGateway)
//! - **Services**: Business logic orchestration
//!
//! ## Architecture
//!
//! This layer has NO dependencies on infrastructure concerns (console, files,
//! databases, etc.). All external dependencies are expressed as traits (ports)
//! that are implemented by adapter layers.
//!
//! ## Example
//!
//! ```rust
//! use userreg_domain::registration::{RegistrationService, UserId, UserRecord};
//! use userreg_domain::ports::StorageGateway;
//!
//! // The service is generic over any StorageGateway implementation
//! async fn example<G: StorageGateway>(service: RegistrationService<G>) {
//!     let record = UserRecord::new(UserId::new(1), "Alice", "alice@example.com");
//!     match service.register(&record).await {
//!         Ok(()) => println!("registered {}", record.id()),
//!         Err(err) => println!("rejected: {}", err),
//!     }
//! }
//! ```

pub mod ports;
pub mod registration;

// Re-export commonly used types
pub use ports::StorageGateway;
pub use registration::{RegistrationError, RegistrationService, UserId, UserRecord};
