//! Closure implementations for every supported arity (0 through 6)

use super::handler::Handler;
use super::operation::Operation;
use std::convert::Infallible;

/// A plain closure lifted into a non-throwing operation
#[derive(Debug, Clone, Copy)]
pub struct Total<F> {
    f: F,
}

/// Lift a closure that cannot fail into an [`Operation`] with
/// `Error = Infallible`.
///
/// ```rust
/// use fnx_core::functional::prelude::*;
///
/// let add = total(|a: i32, b: i32| a + b);
/// assert_eq!(add.apply((2, 3)), 5);
/// ```
pub fn total<F>(f: F) -> Total<F> {
    Total { f }
}

macro_rules! impl_arity {
    ($($arg:ident: $ty:ident),*) => {
        impl<F, R, E, $($ty),*> Operation<($($ty,)*)> for F
        where
            F: Fn($($ty),*) -> Result<R, E>,
        {
            type Output = R;
            type Error = E;

            #[inline]
            fn invoke(&self, ($($arg,)*): ($($ty,)*)) -> Result<R, E> {
                (self)($($arg),*)
            }
        }

        impl<F, R, $($ty),*> Operation<($($ty,)*)> for Total<F>
        where
            F: Fn($($ty),*) -> R,
        {
            type Output = R;
            type Error = Infallible;

            #[inline]
            fn invoke(&self, ($($arg,)*): ($($ty,)*)) -> Result<R, Infallible> {
                Ok((self.f)($($arg),*))
            }
        }

        impl<F, E, R, $($ty),*> Handler<($($ty,)*), E, R> for F
        where
            F: Fn(E, $($ty),*) -> R,
        {
            #[inline]
            fn on_failure(&self, failure: E, ($($arg,)*): ($($ty,)*)) -> R {
                (self)(failure, $($arg),*)
            }
        }
    };
}

impl_arity!();
impl_arity!(a1: A1);
impl_arity!(a1: A1, a2: A2);
impl_arity!(a1: A1, a2: A2, a3: A3);
impl_arity!(a1: A1, a2: A2, a3: A3, a4: A4);
impl_arity!(a1: A1, a2: A2, a3: A3, a4: A4, a5: A5);
impl_arity!(a1: A1, a2: A2, a3: A3, a4: A4, a5: A5, a6: A6);
