//! Primitive scalar kinds and their boxed forms
//!
//! Every primitive an operation can be specialized over implements
//! [`Scalar`]. The trait carries the kind tag, boundary constants, and the
//! canonical box/unbox pair. [`ScalarValue`] is the erased representation
//! used when a single type has to hold any kind.

mod kind;
mod value;

pub use kind::ScalarKind;
pub use value::ScalarValue;

use crate::errors::Error;
use std::fmt::Debug;

/// A primitive scalar that operations can be specialized over.
///
/// # Examples
///
/// ```rust
/// use fnx_core::scalar::{Scalar, ScalarKind};
///
/// assert_eq!(<i16 as Scalar>::KIND, ScalarKind::Short);
/// let boxed = 42_i32.boxed();
/// assert_eq!(i32::unbox(boxed), 42);
/// assert!(f64::NAN.bit_eq(f64::NAN));
/// ```
pub trait Scalar:
    Copy
    + Default
    + PartialEq
    + Debug
    + Send
    + Sync
    + 'static
    + Into<ScalarValue>
    + TryFrom<ScalarValue, Error = Error>
{
    /// The kind tag for this scalar
    const KIND: ScalarKind;
    /// The smallest value of the type
    const MIN: Self;
    /// The largest value of the type
    const MAX: Self;
    /// The zero/default value of the type
    const ZERO: Self;

    /// Move the value to the heap
    #[inline]
    fn boxed(self) -> Box<Self> {
        Box::new(self)
    }

    /// Move a boxed value back out of the heap
    #[inline]
    fn unbox(boxed: Box<Self>) -> Self {
        *boxed
    }

    /// Bit-identical comparison; for floats NaN equals itself and `0.0`
    /// differs from `-0.0`
    fn bit_eq(self, other: Self) -> bool;
}

macro_rules! impl_scalar {
    (@common $t:ty, $variant:ident) => {
        impl From<$t> for ScalarValue {
            #[inline]
            fn from(value: $t) -> Self {
                ScalarValue::$variant(value)
            }
        }

        impl TryFrom<ScalarValue> for $t {
            type Error = Error;

            fn try_from(value: ScalarValue) -> Result<Self, Error> {
                match value {
                    ScalarValue::$variant(inner) => Ok(inner),
                    other => Err(Error::scalar_kind(ScalarKind::$variant, other.kind())),
                }
            }
        }
    };
    (float $t:ty, $variant:ident) => {
        impl_scalar!(@common $t, $variant);

        impl Scalar for $t {
            const KIND: ScalarKind = ScalarKind::$variant;
            const MIN: Self = <$t>::MIN;
            const MAX: Self = <$t>::MAX;
            const ZERO: Self = 0.0;

            #[inline]
            fn bit_eq(self, other: Self) -> bool {
                self.to_bits() == other.to_bits()
            }
        }
    };
    ($t:ty, $variant:ident, $min:expr, $max:expr, $zero:expr) => {
        impl_scalar!(@common $t, $variant);

        impl Scalar for $t {
            const KIND: ScalarKind = ScalarKind::$variant;
            const MIN: Self = $min;
            const MAX: Self = $max;
            const ZERO: Self = $zero;

            #[inline]
            fn bit_eq(self, other: Self) -> bool {
                self == other
            }
        }
    };
}

impl_scalar!(bool, Boolean, false, true, false);
impl_scalar!(i8, Byte, i8::MIN, i8::MAX, 0);
impl_scalar!(i16, Short, i16::MIN, i16::MAX, 0);
impl_scalar!(i32, Int, i32::MIN, i32::MAX, 0);
impl_scalar!(i64, Long, i64::MIN, i64::MAX, 0);
impl_scalar!(char, Char, '\0', char::MAX, '\0');
impl_scalar!(float f32, Float);
impl_scalar!(float f64, Double);

/// Box a scalar
#[inline]
pub fn boxed<T: Scalar>(value: T) -> Box<T> {
    value.boxed()
}

/// Unbox a scalar
#[inline]
pub fn unbox<T: Scalar>(value: Box<T>) -> T {
    T::unbox(value)
}
