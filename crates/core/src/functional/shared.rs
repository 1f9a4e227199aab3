//! Type-erased operations and the named aliases built on them

use super::operation::Operation;
use crate::errors::Error;
use std::fmt;
use std::sync::Arc;

/// A cloneable, thread-safe handle to any operation with the given
/// argument, output, and error types.
///
/// Produced by [`OperationExt::shared`](super::OperationExt::shared). Clones
/// share the same underlying operation.
pub struct SharedOperation<Args, R, E> {
    inner: Arc<dyn Operation<Args, Output = R, Error = E> + Send + Sync>,
}

impl<Args, R, E> SharedOperation<Args, R, E> {
    pub fn new<O>(operation: O) -> Self
    where
        O: Operation<Args, Output = R, Error = E> + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(operation),
        }
    }
}

impl<Args, R, E> Clone for SharedOperation<Args, R, E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<Args, R, E> fmt::Debug for SharedOperation<Args, R, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedOperation")
            .field("args", &std::any::type_name::<Args>())
            .field("output", &std::any::type_name::<R>())
            .field("error", &std::any::type_name::<E>())
            .finish()
    }
}

impl<Args, R, E> Operation<Args> for SharedOperation<Args, R, E> {
    type Output = R;
    type Error = E;

    #[inline]
    fn invoke(&self, args: Args) -> Result<R, E> {
        self.inner.invoke(args)
    }
}

/// `A -> R`
pub type Function<A, R, E = Error> = SharedOperation<(A,), R, E>;
/// `(A, B) -> R`
pub type BiFunction<A, B, R, E = Error> = SharedOperation<(A, B), R, E>;
/// `() -> R`
pub type Supplier<R, E = Error> = SharedOperation<(), R, E>;
/// `A -> ()`
pub type Consumer<A, E = Error> = SharedOperation<(A,), (), E>;
/// `(A, B) -> ()`
pub type BiConsumer<A, B, E = Error> = SharedOperation<(A, B), (), E>;
/// `A -> bool`
pub type Predicate<A, E = Error> = SharedOperation<(A,), bool, E>;
/// `(A, B) -> bool`
pub type BiPredicate<A, B, E = Error> = SharedOperation<(A, B), bool, E>;
/// `T -> T`
pub type UnaryOperator<T, E = Error> = SharedOperation<(T,), T, E>;
/// `(T, T) -> T`
pub type BinaryOperator<T, E = Error> = SharedOperation<(T, T), T, E>;
/// `() -> ()`
pub type Runnable<E = Error> = SharedOperation<(), (), E>;

macro_rules! scalar_aliases {
    ($t:ty => $function:ident, $to_function:ident, $predicate:ident, $unary:ident, $binary:ident, $consumer:ident, $supplier:ident) => {
        #[doc = concat!("`", stringify!($t), " -> R`")]
        pub type $function<R, E = Error> = SharedOperation<($t,), R, E>;
        #[doc = concat!("`A -> ", stringify!($t), "`")]
        pub type $to_function<A, E = Error> = SharedOperation<(A,), $t, E>;
        #[doc = concat!("`", stringify!($t), " -> bool`")]
        pub type $predicate<E = Error> = SharedOperation<($t,), bool, E>;
        #[doc = concat!("`", stringify!($t), " -> ", stringify!($t), "`")]
        pub type $unary<E = Error> = SharedOperation<($t,), $t, E>;
        #[doc = concat!("`(", stringify!($t), ", ", stringify!($t), ") -> ", stringify!($t), "`")]
        pub type $binary<E = Error> = SharedOperation<($t, $t), $t, E>;
        #[doc = concat!("`", stringify!($t), " -> ()`")]
        pub type $consumer<E = Error> = SharedOperation<($t,), (), E>;
        #[doc = concat!("`() -> ", stringify!($t), "`")]
        pub type $supplier<E = Error> = SharedOperation<(), $t, E>;
    };
}

scalar_aliases!(bool => BooleanFunction, ToBooleanFunction, BooleanPredicate, BooleanUnaryOperator, BooleanBinaryOperator, BooleanConsumer, BooleanSupplier);
scalar_aliases!(i8 => ByteFunction, ToByteFunction, BytePredicate, ByteUnaryOperator, ByteBinaryOperator, ByteConsumer, ByteSupplier);
scalar_aliases!(i16 => ShortFunction, ToShortFunction, ShortPredicate, ShortUnaryOperator, ShortBinaryOperator, ShortConsumer, ShortSupplier);
scalar_aliases!(i32 => IntFunction, ToIntFunction, IntPredicate, IntUnaryOperator, IntBinaryOperator, IntConsumer, IntSupplier);
scalar_aliases!(i64 => LongFunction, ToLongFunction, LongPredicate, LongUnaryOperator, LongBinaryOperator, LongConsumer, LongSupplier);
scalar_aliases!(f32 => FloatFunction, ToFloatFunction, FloatPredicate, FloatUnaryOperator, FloatBinaryOperator, FloatConsumer, FloatSupplier);
scalar_aliases!(f64 => DoubleFunction, ToDoubleFunction, DoublePredicate, DoubleUnaryOperator, DoubleBinaryOperator, DoubleConsumer, DoubleSupplier);
scalar_aliases!(char => CharFunction, ToCharFunction, CharPredicate, CharUnaryOperator, CharBinaryOperator, CharConsumer, CharSupplier);
