//! Registration domain module
//!
//! This module contains the core business logic and entities for user
//! registration. It defines what a UserRecord is and how a registration
//! request flows from validation to persistence.

pub mod entity;
pub mod error;
pub mod ids;
pub mod service;

pub use entity::UserRecord;
pub use error::{RegistrationError, Result};
pub use ids::UserId;
pub use service::RegistrationService;
