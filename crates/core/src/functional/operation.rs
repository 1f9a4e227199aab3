//! The fallible operation trait and its combinator methods

use super::composition::{
    AndThen, CatchUnwind, ComposeFirst, ComposeSecond, Flip, FollowedBy, Map, MapErr, Widened,
    WithArguments,
};
use super::handler::{Handled, Handler, SwallowWith, Swallowed};
use super::shared::SharedOperation;
use super::traced::Traced;
use crate::config::TraceConfig;
use crate::errors::Error;
use std::convert::Infallible;

/// A single callable step that may fail.
///
/// `Args` is the tuple of argument types: `()` for suppliers, `(A,)` for
/// unary functions, `(A, B)` for binary ones and so on up to six arguments.
/// Closures returning `Result` implement this trait for their own signature,
/// so any `Fn(A, B) -> Result<R, E>` is an `Operation<(A, B)>`.
///
/// Operations hold no mutable state. Invoking one twice performs two
/// independent evaluations.
pub trait Operation<Args> {
    /// The success value
    type Output;
    /// The failure value; `Infallible` for non-throwing operations
    type Error;

    /// Apply the operation to `args`
    fn invoke(&self, args: Args) -> Result<Self::Output, Self::Error>;
}

/// Combinators available on every [`Operation`]
pub trait OperationExt<Args>: Operation<Args> + Sized {
    /// Run `self`, then feed its output to `next`.
    ///
    /// `next` is never invoked when `self` fails.
    fn and_then<G>(self, next: G) -> AndThen<Self, G>
    where
        G: Operation<(Self::Output,), Error = Self::Error>,
    {
        AndThen::new(self, next)
    }

    /// Transform the success value with an infallible function
    fn map<M, R>(self, f: M) -> Map<Self, M>
    where
        M: Fn(Self::Output) -> R,
    {
        Map::new(self, f)
    }

    /// Transform the failure value
    fn map_err<M, E>(self, f: M) -> MapErr<Self, M>
    where
        M: Fn(Self::Error) -> E,
    {
        MapErr::new(self, f)
    }

    /// Recover from failures with `handler`, producing a non-throwing
    /// operation.
    ///
    /// The handler receives the failure followed by the original arguments
    /// and is called exactly once per failed invocation.
    fn handle<H>(self, handler: H) -> Handled<Self, H>
    where
        Args: Clone,
        H: Handler<Args, Self::Error, Self::Output>,
    {
        Handled::new(self, handler)
    }

    /// Same as [`handle`](OperationExt::handle)
    fn recover<H>(self, handler: H) -> Handled<Self, H>
    where
        Args: Clone,
        H: Handler<Args, Self::Error, Self::Output>,
    {
        self.handle(handler)
    }

    /// Discard failures, returning `Output::default()` in their place
    fn swallow(self) -> Swallowed<Self>
    where
        Self::Output: Default,
    {
        Swallowed::new(self)
    }

    /// Discard failures, returning a clone of `fallback` in their place
    fn swallow_with(self, fallback: Self::Output) -> SwallowWith<Self, Self::Output>
    where
        Self::Output: Clone,
    {
        SwallowWith::new(self, fallback)
    }

    /// Pair every failure with the arguments that caused it
    fn with_arguments(self) -> WithArguments<Self>
    where
        Args: Clone,
    {
        WithArguments::new(self)
    }

    /// Convert panics raised by the body into [`Error::Panicked`]
    fn catch_unwind(self) -> CatchUnwind<Self>
    where
        Self::Error: Into<Error>,
    {
        CatchUnwind::new(self)
    }

    /// Emit tracing events for each invocation
    fn traced(self, config: TraceConfig) -> Traced<Self> {
        Traced::new(self, config)
    }

    /// Erase the combinator type behind a cloneable, thread-safe handle
    fn shared(self) -> SharedOperation<Args, Self::Output, Self::Error>
    where
        Self: Send + Sync + 'static,
    {
        SharedOperation::new(self)
    }
}

impl<Args, O> OperationExt<Args> for O where O: Operation<Args> {}

/// Pre-composition for unary operations
pub trait UnaryOperationExt<A>: Operation<(A,)> + Sized {
    /// Run `before` first and feed its output into `self`.
    ///
    /// Equivalent to `before.and_then(self)`.
    fn compose<B, BArgs>(self, before: B) -> AndThen<B, Self>
    where
        B: Operation<BArgs, Output = A, Error = Self::Error>,
    {
        AndThen::new(before, self)
    }
}

impl<A, O> UnaryOperationExt<A> for O where O: Operation<(A,)> {}

/// Slot-wise pre-composition and argument flipping for binary operations
pub trait BinaryOperationExt<A, B>: Operation<(A, B)> + Sized {
    /// Feed the output of a unary `before` into the first slot
    fn compose_first<P, Z>(self, before: P) -> ComposeFirst<Self, P>
    where
        P: Operation<(Z,), Output = A, Error = Self::Error>,
    {
        ComposeFirst::new(self, before)
    }

    /// Feed the output of a unary `before` into the second slot
    fn compose_second<P, Z>(self, before: P) -> ComposeSecond<Self, P>
    where
        P: Operation<(Z,), Output = B, Error = Self::Error>,
    {
        ComposeSecond::new(self, before)
    }

    /// Swap the two arguments
    fn flip(self) -> Flip<Self> {
        Flip::new(self)
    }
}

impl<A, B, O> BinaryOperationExt<A, B> for O where O: Operation<(A, B)> {}

/// Sequencing for consumers (operations producing `()`)
pub trait ConsumerExt<Args>: Operation<Args, Output = ()> + Sized {
    /// Run `next` with the same arguments once `self` has succeeded
    fn followed_by<D>(self, next: D) -> FollowedBy<Self, D>
    where
        Args: Clone,
        D: Operation<Args, Output = (), Error = Self::Error>,
    {
        FollowedBy::new(self, next)
    }
}

impl<Args, O> ConsumerExt<Args> for O where O: Operation<Args, Output = ()> {}

/// Operations that cannot fail
pub trait TotalOperation<Args>: Operation<Args, Error = Infallible> {
    /// Invoke without a `Result`
    fn apply(&self, args: Args) -> Self::Output {
        match self.invoke(args) {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }

    /// Give the operation a failure type so it can be combined with
    /// throwing operations
    fn widen<E>(self) -> Widened<Self, E>
    where
        Self: Sized,
    {
        Widened::new(self)
    }
}

impl<Args, O> TotalOperation<Args> for O where O: Operation<Args, Error = Infallible> {}
