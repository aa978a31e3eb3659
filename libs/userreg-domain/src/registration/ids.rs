use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a UserRecord
///
/// UserId is a wrapper around a caller-assigned integer to provide type
/// safety and prevent mixing up user identifiers with other numeric values
/// in the system. No uniqueness is enforced by the domain layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(u64);

impl UserId {
    /// Create a UserId from a caller-assigned integer
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the inner integer value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<UserId> for u64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}
