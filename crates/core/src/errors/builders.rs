//! Builder methods for creating errors with context

use super::types::Error;
use crate::scalar::ScalarKind;

impl Error {
    /// Create an operation failure with a message
    #[must_use]
    pub fn operation(message: impl Into<String>) -> Self {
        Error::Operation {
            message: message.into(),
            source: None,
        }
    }

    /// Create an operation failure with a source error
    #[must_use]
    pub fn operation_with_source(
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Error::Operation {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Wrap any error as an operation failure, keeping it as the source
    #[must_use]
    pub fn other<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Operation {
            message: error.to_string(),
            source: Some(Box::new(error)),
        }
    }

    /// Create a panic error
    #[must_use]
    pub fn panicked(message: impl Into<String>) -> Self {
        Error::Panicked {
            message: message.into(),
        }
    }

    /// Create a scalar kind mismatch error
    #[must_use]
    pub fn scalar_kind(expected: ScalarKind, found: ScalarKind) -> Self {
        Error::ScalarKind { expected, found }
    }

    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// Returns true if this failure came from a caught panic
    pub fn is_panic(&self) -> bool {
        matches!(self, Error::Panicked { .. })
    }
}
