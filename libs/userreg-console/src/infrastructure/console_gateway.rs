//! Console implementation of the StorageGateway port
//!
//! This module implements the `StorageGateway` trait with standard output as
//! the backend. Persistence is simulated: saving a record means printing one
//! human-readable line. The adapter cannot fail, but it still goes through
//! the fallible port contract so it stays interchangeable with real backends.

use tracing::{debug, instrument};
use userreg_domain::{
    ports::StorageGateway,
    registration::{entity::UserRecord, error::RegistrationError},
};

/// Console-backed implementation of the StorageGateway port
///
/// This adapter translates the domain's save operation into a line on
/// stdout. It holds no state; every call is independent, and a single
/// instance can be shared freely.
///
/// ## Output format
///
/// One line per saved record:
///
/// ```text
/// Saving user to database: Alice (Email: alice@example.com)
/// ```
///
/// The line is program output, not logging; diagnostic events go through
/// `tracing` separately and can be silenced without changing the output.
#[derive(Debug, Clone, Default)]
pub struct ConsoleStorageGateway;

impl ConsoleStorageGateway {
    /// Create a new console storage gateway
    pub fn new() -> Self {
        Self
    }

    /// Render the save line for a record
    ///
    /// Kept separate from the side effect so the exact format is testable
    /// without capturing stdout.
    fn render_save_line(record: &UserRecord) -> String {
        format!(
            "Saving user to database: {} (Email: {})",
            record.name(),
            record.email()
        )
    }
}

impl StorageGateway for ConsoleStorageGateway {
    #[instrument(skip(self, record), fields(user_id = %record.id()))]
    fn save(
        &self,
        record: &UserRecord,
    ) -> impl std::future::Future<Output = Result<(), RegistrationError>> + Send {
        let line = Self::render_save_line(record);

        async move {
            debug!("Writing save line to console");
            println!("{line}");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use userreg_domain::registration::UserId;

    #[test]
    fn test_save_line_format() {
        let record = UserRecord::new(UserId::new(1), "Alice", "alice@example.com");

        assert_eq!(
            ConsoleStorageGateway::render_save_line(&record),
            "Saving user to database: Alice (Email: alice@example.com)"
        );
    }

    #[tokio::test]
    async fn test_save_never_fails() {
        let gateway = ConsoleStorageGateway::new();
        let record = UserRecord::new(UserId::new(2), "Bob", "bob@example.com");

        assert!(gateway.save(&record).await.is_ok());
    }
}
