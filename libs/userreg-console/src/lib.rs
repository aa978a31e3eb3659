//! Console storage adapter for the userreg registration example
//!
//! Implements the domain's `StorageGateway` port by emitting a
//! human-readable line to standard output. This is the "Framework/Driver"
//! ring of the example: the domain never knows its records end up on a
//! console rather than in a database.

pub mod infrastructure;

pub use infrastructure::ConsoleStorageGateway;
