//! userreg - Clean Architecture registration demo
//!
//! Wires one console storage gateway into one registration service, registers
//! a single literal user record and prints the outcome. Composition is plain
//! constructor injection, no runtime discovery.

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use userreg_console::ConsoleStorageGateway;
use userreg_domain::{RegistrationService, UserId, UserRecord};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing; diagnostics are separate from program output
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    info!("Starting userreg demo");

    // Framework ring: the concrete storage backend
    let gateway = ConsoleStorageGateway::new();

    // Use case ring: the service, wired by constructor injection
    let service = RegistrationService::new(gateway);

    // Entity: a caller-constructed record with literal values
    let record = UserRecord::new(UserId::new(1), "Alice", "alice@example.com");

    info!(user_id = %record.id(), "Registering user");

    // A rejected registration is a reported outcome, not a process fault
    match service.register(&record).await {
        Ok(()) => println!("User registered successfully!"),
        Err(err) => {
            warn!(error = %err, "Registration rejected");
            println!("User registration failed.");
        }
    }

    Ok(())
}
