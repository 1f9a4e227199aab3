//! Sequencing and transformation combinators

use super::operation::Operation;
use crate::errors::{Error, InvocationError};
use std::convert::Infallible;
use std::fmt;
use std::marker::PhantomData;
use std::panic::{self, AssertUnwindSafe};

/// `first` then `second`, short-circuiting on failure
#[derive(Debug, Clone, Copy)]
pub struct AndThen<F, G> {
    first: F,
    second: G,
}

impl<F, G> AndThen<F, G> {
    pub fn new(first: F, second: G) -> Self {
        Self { first, second }
    }
}

impl<Args, F, G> Operation<Args> for AndThen<F, G>
where
    F: Operation<Args>,
    G: Operation<(F::Output,), Error = F::Error>,
{
    type Output = G::Output;
    type Error = F::Error;

    #[inline]
    fn invoke(&self, args: Args) -> Result<G::Output, F::Error> {
        let intermediate = self.first.invoke(args)?;
        self.second.invoke((intermediate,))
    }
}

/// Infallible transform of the success value
#[derive(Debug, Clone, Copy)]
pub struct Map<O, M> {
    operation: O,
    f: M,
}

impl<O, M> Map<O, M> {
    pub fn new(operation: O, f: M) -> Self {
        Self { operation, f }
    }
}

impl<Args, O, M, R> Operation<Args> for Map<O, M>
where
    O: Operation<Args>,
    M: Fn(O::Output) -> R,
{
    type Output = R;
    type Error = O::Error;

    #[inline]
    fn invoke(&self, args: Args) -> Result<R, O::Error> {
        self.operation.invoke(args).map(&self.f)
    }
}

/// Transform of the failure value
#[derive(Debug, Clone, Copy)]
pub struct MapErr<O, M> {
    operation: O,
    f: M,
}

impl<O, M> MapErr<O, M> {
    pub fn new(operation: O, f: M) -> Self {
        Self { operation, f }
    }
}

impl<Args, O, M, E> Operation<Args> for MapErr<O, M>
where
    O: Operation<Args>,
    M: Fn(O::Error) -> E,
{
    type Output = O::Output;
    type Error = E;

    #[inline]
    fn invoke(&self, args: Args) -> Result<O::Output, E> {
        self.operation.invoke(args).map_err(&self.f)
    }
}

/// Attaches the original arguments to every failure
#[derive(Debug, Clone, Copy)]
pub struct WithArguments<O> {
    operation: O,
}

impl<O> WithArguments<O> {
    pub fn new(operation: O) -> Self {
        Self { operation }
    }
}

impl<Args, O> Operation<Args> for WithArguments<O>
where
    Args: Clone,
    O: Operation<Args>,
{
    type Output = O::Output;
    type Error = InvocationError<Args, O::Error>;

    fn invoke(&self, args: Args) -> Result<O::Output, Self::Error> {
        self.operation
            .invoke(args.clone())
            .map_err(|cause| InvocationError::new(args, cause))
    }
}

/// Turns panics into [`Error::Panicked`]
#[derive(Debug, Clone, Copy)]
pub struct CatchUnwind<O> {
    operation: O,
}

impl<O> CatchUnwind<O> {
    pub fn new(operation: O) -> Self {
        Self { operation }
    }
}

impl<Args, O> Operation<Args> for CatchUnwind<O>
where
    O: Operation<Args>,
    O::Error: Into<Error>,
{
    type Output = O::Output;
    type Error = Error;

    fn invoke(&self, args: Args) -> Result<O::Output, Error> {
        // Operations are stateless, so nothing observable is left half-updated.
        match panic::catch_unwind(AssertUnwindSafe(|| self.operation.invoke(args))) {
            Ok(outcome) => outcome.map_err(Into::into),
            Err(payload) => {
                let message = if let Some(message) = payload.downcast_ref::<&str>() {
                    (*message).to_string()
                } else if let Some(message) = payload.downcast_ref::<String>() {
                    message.clone()
                } else {
                    "non-string panic payload".to_string()
                };
                tracing::debug!(panic = %message, "operation panicked; converted to failure");
                Err(Error::panicked(message))
            }
        }
    }
}

/// A non-throwing operation given a failure type it never produces
pub struct Widened<O, E> {
    operation: O,
    _error: PhantomData<fn() -> E>,
}

impl<O, E> Widened<O, E> {
    pub fn new(operation: O) -> Self {
        Self {
            operation,
            _error: PhantomData,
        }
    }
}

impl<O: fmt::Debug, E> fmt::Debug for Widened<O, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Widened")
            .field("operation", &self.operation)
            .finish()
    }
}

impl<O: Clone, E> Clone for Widened<O, E> {
    fn clone(&self) -> Self {
        Self::new(self.operation.clone())
    }
}

impl<O: Copy, E> Copy for Widened<O, E> {}

impl<Args, O, E> Operation<Args> for Widened<O, E>
where
    O: Operation<Args, Error = Infallible>,
{
    type Output = O::Output;
    type Error = E;

    #[inline]
    fn invoke(&self, args: Args) -> Result<O::Output, E> {
        match self.operation.invoke(args) {
            Ok(value) => Ok(value),
            Err(never) => match never {},
        }
    }
}

/// Two consumers run with the same arguments
#[derive(Debug, Clone, Copy)]
pub struct FollowedBy<C, D> {
    first: C,
    second: D,
}

impl<C, D> FollowedBy<C, D> {
    pub fn new(first: C, second: D) -> Self {
        Self { first, second }
    }
}

impl<Args, C, D> Operation<Args> for FollowedBy<C, D>
where
    Args: Clone,
    C: Operation<Args, Output = ()>,
    D: Operation<Args, Output = (), Error = C::Error>,
{
    type Output = ();
    type Error = C::Error;

    fn invoke(&self, args: Args) -> Result<(), C::Error> {
        self.first.invoke(args.clone())?;
        self.second.invoke(args)
    }
}

/// A binary operation whose first argument is produced by a unary one
#[derive(Debug, Clone, Copy)]
pub struct ComposeFirst<O, P> {
    operation: O,
    before: P,
}

impl<O, P> ComposeFirst<O, P> {
    pub fn new(operation: O, before: P) -> Self {
        Self { operation, before }
    }
}

impl<Z, A, B, O, P> Operation<(Z, B)> for ComposeFirst<O, P>
where
    P: Operation<(Z,), Output = A>,
    O: Operation<(A, B), Error = P::Error>,
{
    type Output = O::Output;
    type Error = P::Error;

    fn invoke(&self, (z, b): (Z, B)) -> Result<O::Output, P::Error> {
        let a = self.before.invoke((z,))?;
        self.operation.invoke((a, b))
    }
}

/// A binary operation whose second argument is produced by a unary one
#[derive(Debug, Clone, Copy)]
pub struct ComposeSecond<O, P> {
    operation: O,
    before: P,
}

impl<O, P> ComposeSecond<O, P> {
    pub fn new(operation: O, before: P) -> Self {
        Self { operation, before }
    }
}

impl<A, Z, B, O, P> Operation<(A, Z)> for ComposeSecond<O, P>
where
    P: Operation<(Z,), Output = B>,
    O: Operation<(A, B), Error = P::Error>,
{
    type Output = O::Output;
    type Error = P::Error;

    fn invoke(&self, (a, z): (A, Z)) -> Result<O::Output, P::Error> {
        let b = self.before.invoke((z,))?;
        self.operation.invoke((a, b))
    }
}

/// A binary operation with its arguments swapped
#[derive(Debug, Clone, Copy)]
pub struct Flip<O> {
    operation: O,
}

impl<O> Flip<O> {
    pub fn new(operation: O) -> Self {
        Self { operation }
    }
}

impl<A, B, O> Operation<(B, A)> for Flip<O>
where
    O: Operation<(A, B)>,
{
    type Output = O::Output;
    type Error = O::Error;

    #[inline]
    fn invoke(&self, (b, a): (B, A)) -> Result<O::Output, O::Error> {
        self.operation.invoke((a, b))
    }
}

/// Chain operations left to right with `and_then`
///
/// ```rust
/// use fnx_core::chain;
/// use fnx_core::functional::prelude::*;
///
/// let parse = |s: &str| s.trim().parse::<i32>().map_err(fnx_core::Error::other);
/// let double = |n: i32| Ok::<_, fnx_core::Error>(n * 2);
/// let op = chain!(parse, double, double);
/// assert_eq!(op.invoke((" 5 ",)).unwrap(), 20);
/// ```
#[macro_export]
macro_rules! chain {
    ($op:expr) => {
        $op
    };
    ($op:expr, $($next:expr),+ $(,)?) => {{
        let chained = $op;
        $(
            let chained = $crate::functional::OperationExt::and_then(chained, $next);
        )+
        chained
    }};
}
