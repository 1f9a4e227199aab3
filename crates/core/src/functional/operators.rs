//! Ready-made operations: identity, constants, and conditional selection

use super::operation::Operation;
use std::convert::Infallible;
use std::fmt;
use std::marker::PhantomData;

/// Returns its single argument unchanged
pub struct Identity<T> {
    _marker: PhantomData<fn(T) -> T>,
}

/// Identity function
pub fn identity<T>() -> Identity<T> {
    Identity {
        _marker: PhantomData,
    }
}

impl<T> fmt::Debug for Identity<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Identity")
    }
}

impl<T> Clone for Identity<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Identity<T> {}

impl<T> Operation<(T,)> for Identity<T> {
    type Output = T;
    type Error = Infallible;

    #[inline]
    fn invoke(&self, (value,): (T,)) -> Result<T, Infallible> {
        Ok(value)
    }
}

/// A supplier returning clones of a fixed value
#[derive(Debug, Clone, Copy)]
pub struct Constant<T> {
    value: T,
}

/// Constant function
pub fn constant<T: Clone>(value: T) -> Constant<T> {
    Constant { value }
}

impl<T: Clone> Operation<()> for Constant<T> {
    type Output = T;
    type Error = Infallible;

    #[inline]
    fn invoke(&self, (): ()) -> Result<T, Infallible> {
        Ok(self.value.clone())
    }
}

/// Selects between two values by evaluating a predicate on a third
#[derive(Debug, Clone, Copy)]
pub struct Conditional<P> {
    predicate: P,
}

/// Build a 3-argument operation `(a, b, c)` returning `b` when
/// `predicate(a)` holds and `c` otherwise.
///
/// ```rust
/// use fnx_core::functional::prelude::*;
///
/// let sign = conditional(total(|n: i32| n >= 0));
/// assert_eq!(sign.apply((5, "non-negative", "negative")), "non-negative");
/// assert_eq!(sign.apply((-5, "non-negative", "negative")), "negative");
/// ```
pub fn conditional<P>(predicate: P) -> Conditional<P> {
    Conditional { predicate }
}

impl<A, T, P> Operation<(A, T, T)> for Conditional<P>
where
    P: Operation<(A,), Output = bool>,
{
    type Output = T;
    type Error = P::Error;

    fn invoke(&self, (a, if_true, if_false): (A, T, T)) -> Result<T, P::Error> {
        if self.predicate.invoke((a,))? {
            Ok(if_true)
        } else {
            Ok(if_false)
        }
    }
}
