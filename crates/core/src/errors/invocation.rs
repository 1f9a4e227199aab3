//! Failures paired with the arguments that triggered them

use std::error::Error as StdError;
use std::fmt;

/// An operation failure carrying the original arguments alongside the cause.
///
/// Produced by [`with_arguments`](crate::functional::OperationExt::with_arguments).
/// `A` is the argument tuple of the failed invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct InvocationError<A, E> {
    arguments: A,
    cause: E,
}

impl<A, E> InvocationError<A, E> {
    /// Create a new invocation error
    pub fn new(arguments: A, cause: E) -> Self {
        Self { arguments, cause }
    }

    /// The arguments the failing invocation received
    pub fn arguments(&self) -> &A {
        &self.arguments
    }

    /// The underlying failure
    pub fn cause(&self) -> &E {
        &self.cause
    }

    /// Split into arguments and cause
    pub fn into_parts(self) -> (A, E) {
        (self.arguments, self.cause)
    }

    /// Drop the arguments, keeping only the cause
    pub fn into_cause(self) -> E {
        self.cause
    }
}

impl<A: fmt::Debug, E: fmt::Display> fmt::Display for InvocationError<A, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invocation with arguments {:?} failed: {}", self.arguments, self.cause)
    }
}

impl<A, E> StdError for InvocationError<A, E>
where
    A: fmt::Debug,
    E: StdError + 'static,
{
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.cause)
    }
}
