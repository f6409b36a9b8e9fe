//! Correlation types for invocation tracking
//!
//! A single invocation may pass through several command nodes before a
//! handler runs. Every log event emitted along that path carries the same
//! `InvocationId`, so the whole route can be reassembled from the logs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for one command invocation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InvocationId(String);

impl InvocationId {
    /// Generate a new InvocationId using UUIDv7
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Create from an existing string (for deserialization or host-supplied ids)
    pub fn from_string(s: String) -> Self {
        Self(s)
    }
}

impl Default for InvocationId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for InvocationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
