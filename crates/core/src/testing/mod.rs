//! Property-based testing utilities for operations and scalars

use crate::errors::{Error, Result};
use crate::functional::prelude::*;
use crate::scalar::{Scalar, ScalarKind, ScalarValue};
use proptest::prelude::*;

/// Property-based test generators
pub mod generators {
    use super::*;

    /// Any value of `T`, with its boundary constants drawn more often than
    /// chance would give them
    pub fn scalar<T>() -> impl Strategy<Value = T>
    where
        T: Scalar + Arbitrary,
    {
        prop_oneof![
            1 => Just(T::MIN),
            1 => Just(T::MAX),
            1 => Just(T::ZERO),
            7 => any::<T>(),
        ]
    }

    /// An erased scalar of any kind
    pub fn scalar_value() -> impl Strategy<Value = ScalarValue> {
        prop_oneof![
            scalar::<bool>().prop_map(ScalarValue::from),
            scalar::<i8>().prop_map(ScalarValue::from),
            scalar::<i16>().prop_map(ScalarValue::from),
            scalar::<i32>().prop_map(ScalarValue::from),
            scalar::<i64>().prop_map(ScalarValue::from),
            scalar::<f32>().prop_map(ScalarValue::from),
            scalar::<f64>().prop_map(ScalarValue::from),
            scalar::<char>().prop_map(ScalarValue::from),
        ]
    }
}

/// Fails for odd inputs, halves even ones
pub fn halve_even(n: i64) -> Result<i64> {
    if n % 2 == 0 {
        Ok(n / 2)
    } else {
        Err(Error::operation(format!("{n} is odd")))
    }
}

/// Fails on overflow, adds three otherwise
pub fn add_three(n: i64) -> Result<i64> {
    n.checked_add(3)
        .ok_or_else(|| Error::operation(format!("{n} + 3 overflows")))
}

#[cfg(test)]
mod property_tests {
    use super::generators::*;
    use super::*;
    use std::cell::Cell;
    use std::convert::Infallible;

    fn same_outcome(a: Result<i64>, b: Result<i64>) -> bool {
        match (a, b) {
            (Ok(x), Ok(y)) => x == y,
            (Err(x), Err(y)) => x.to_string() == y.to_string(),
            _ => false,
        }
    }

    proptest! {
        /// `and_then` is associative
        #[test]
        fn and_then_is_associative(x in scalar::<i64>()) {
            let left = halve_even.and_then(add_three).and_then(halve_even);
            let right = halve_even.and_then(add_three.and_then(halve_even));
            prop_assert!(same_outcome(left.invoke((x,)), right.invoke((x,))));
        }

        /// Identity is neutral on both sides of `and_then`
        #[test]
        fn identity_is_neutral(x in scalar::<i64>()) {
            let before = identity::<i64>().widen::<Error>().and_then(halve_even);
            let after = halve_even.and_then(identity::<i64>().widen::<Error>());
            prop_assert!(same_outcome(before.invoke((x,)), halve_even(x)));
            prop_assert!(same_outcome(after.invoke((x,)), halve_even(x)));
        }

        /// The successor runs exactly when the first step succeeds
        #[test]
        fn and_then_runs_successor_only_on_success(x in scalar::<i64>()) {
            let calls = Cell::new(0_usize);
            let counted = |n: i64| {
                calls.set(calls.get() + 1);
                Ok::<_, Error>(n)
            };
            let outcome = halve_even.and_then(counted).invoke((x,));

            prop_assert_eq!(outcome.is_ok(), x % 2 == 0);
            prop_assert_eq!(calls.get(), usize::from(x % 2 == 0));
        }

        /// The handler sees every failure once and nothing else
        #[test]
        fn handler_called_once_per_failure(x in scalar::<i64>()) {
            let calls = Cell::new(0);
            let op = halve_even.handle(|_: Error, n: i64| {
                calls.set(calls.get() + 1);
                n
            });

            let value = op.apply((x,));
            if x % 2 == 0 {
                prop_assert_eq!(value, x / 2);
                prop_assert_eq!(calls.get(), 0);
            } else {
                prop_assert_eq!(value, x);
                prop_assert_eq!(calls.get(), 1);
            }
        }

        /// Swallowed operations never fail
        #[test]
        fn swallow_never_fails(x in scalar::<i64>()) {
            let outcome: std::result::Result<i64, Infallible> = halve_even.swallow().invoke((x,));
            prop_assert_eq!(outcome, Ok(if x % 2 == 0 { x / 2 } else { 0 }));
        }

        /// Flipping twice restores the original argument order
        #[test]
        fn flip_is_an_involution(a in scalar::<i32>(), b in scalar::<i32>()) {
            let sub = total(|x: i32, y: i32| x.wrapping_sub(y));
            prop_assert_eq!(sub.flip().flip().apply((a, b)), sub.apply((a, b)));
            prop_assert_eq!(sub.flip().apply((a, b)), sub.apply((b, a)));
        }

        /// `nand` and `nor` obey De Morgan's laws
        #[test]
        fn de_morgan(x in scalar::<i16>()) {
            let negative = total(|n: i16| n < 0);
            let even = total(|n: i16| n % 2 == 0);
            prop_assert_eq!(
                negative.nand(even).apply((x,)),
                negative.not().or(even.not()).apply((x,))
            );
            prop_assert_eq!(
                negative.nor(even).apply((x,)),
                negative.not().and(even.not()).apply((x,))
            );
        }

        /// Unboxing an erased scalar succeeds only for its own kind
        #[test]
        fn erased_scalar_checks_kind(value in scalar_value()) {
            prop_assert_eq!(i32::try_from(value).is_ok(), value.kind() == ScalarKind::Int);
            prop_assert_eq!(char::try_from(value).is_ok(), value.kind() == ScalarKind::Char);
            if let Ok(double) = f64::try_from(value) {
                prop_assert!(ScalarValue::from(double).bit_eq(&value));
            }
        }
    }
}
