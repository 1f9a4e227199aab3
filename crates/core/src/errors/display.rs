//! Display implementations for error types

use super::types::Error;
use std::fmt;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Operation { message, .. } => write!(f, "operation failed: {message}"),
            Error::Panicked { message } => write!(f, "operation panicked: {message}"),
            Error::ScalarKind { expected, found } => {
                write!(f, "expected a {expected} scalar, found {found}")
            }
            Error::Configuration { message } => write!(f, "configuration error: {message}"),
            Error::Json { message, .. } => write!(f, "JSON error: {message}"),
        }
    }
}
