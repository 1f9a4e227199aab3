//! Extension traits for error handling

use super::types::{Error, Result};

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to a Result
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a lazy message
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<Error>,
{
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let base_error: Error = e.into();
            Error::operation_with_source(message, base_error)
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let base_error: Error = e.into();
            Error::operation_with_source(f(), base_error)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_context_keeps_source() {
        let result: std::result::Result<(), Error> = Err(Error::operation("disk full"));
        let err = result.context("writing snapshot").unwrap_err();

        assert_eq!(err.to_string(), "operation failed: writing snapshot");
        let source = err.source().expect("source should be kept");
        assert_eq!(source.to_string(), "operation failed: disk full");
    }

    #[test]
    fn test_with_context_is_lazy() {
        let ok: std::result::Result<u8, Error> = Ok(7);
        let value = ok
            .with_context(|| panic!("context built for a success"))
            .unwrap();
        assert_eq!(value, 7);
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert!(matches!(err, Error::Operation { .. }));
        assert_eq!(err.to_string(), "operation failed: missing");
    }
}
