//! Infrastructure implementations of domain ports

mod console_gateway;

pub use console_gateway::ConsoleStorageGateway;
