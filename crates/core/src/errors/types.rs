//! Core error type definitions

use crate::scalar::ScalarKind;

/// Result type alias for fnx operations
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The broad failure category used by throwing operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A failure raised by an operation body
    Operation {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The operation body panicked while running under `catch_unwind`
    Panicked { message: String },

    /// An erased scalar did not hold the requested kind
    ScalarKind {
        expected: ScalarKind,
        found: ScalarKind,
    },

    /// Configuration errors
    Configuration { message: String },

    /// JSON serialization/deserialization errors
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}
