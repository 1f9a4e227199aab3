//! Failure handlers and the non-throwing operations built from them

use super::operation::Operation;
use std::convert::Infallible;
use tracing::{debug, trace};

/// A total callback producing a fallback value from a failure.
///
/// Closures of the form `Fn(E, A1, .., An) -> R` implement
/// `Handler<(A1, .., An), E, R>`: the failure comes first, followed by the
/// arguments of the invocation that failed. A handler has no way to fail.
pub trait Handler<Args, E, R> {
    /// Produce the fallback for `failure` raised by an invocation with `args`
    fn on_failure(&self, failure: E, args: Args) -> R;
}

/// An operation whose failures are routed to a handler
#[derive(Debug, Clone, Copy)]
pub struct Handled<O, H> {
    operation: O,
    handler: H,
}

impl<O, H> Handled<O, H> {
    pub fn new(operation: O, handler: H) -> Self {
        Self { operation, handler }
    }
}

impl<Args, O, H> Operation<Args> for Handled<O, H>
where
    Args: Clone,
    O: Operation<Args>,
    H: Handler<Args, O::Error, O::Output>,
{
    type Output = O::Output;
    type Error = Infallible;

    fn invoke(&self, args: Args) -> Result<O::Output, Infallible> {
        match self.operation.invoke(args.clone()) {
            Ok(value) => Ok(value),
            Err(failure) => {
                debug!("operation failure recovered by handler");
                Ok(self.handler.on_failure(failure, args))
            }
        }
    }
}

/// An operation whose failures are replaced by `Output::default()`
#[derive(Debug, Clone, Copy)]
pub struct Swallowed<O> {
    operation: O,
}

impl<O> Swallowed<O> {
    pub fn new(operation: O) -> Self {
        Self { operation }
    }
}

impl<Args, O> Operation<Args> for Swallowed<O>
where
    O: Operation<Args>,
    O::Output: Default,
{
    type Output = O::Output;
    type Error = Infallible;

    fn invoke(&self, args: Args) -> Result<O::Output, Infallible> {
        Ok(self.operation.invoke(args).unwrap_or_else(|_| {
            trace!("operation failure swallowed");
            O::Output::default()
        }))
    }
}

/// An operation whose failures are replaced by a fixed value
#[derive(Debug, Clone, Copy)]
pub struct SwallowWith<O, T> {
    operation: O,
    fallback: T,
}

impl<O, T> SwallowWith<O, T> {
    pub fn new(operation: O, fallback: T) -> Self {
        Self {
            operation,
            fallback,
        }
    }
}

impl<Args, O, T> Operation<Args> for SwallowWith<O, T>
where
    O: Operation<Args, Output = T>,
    T: Clone,
{
    type Output = T;
    type Error = Infallible;

    fn invoke(&self, args: Args) -> Result<T, Infallible> {
        Ok(self.operation.invoke(args).unwrap_or_else(|_| {
            trace!("operation failure swallowed");
            self.fallback.clone()
        }))
    }
}
