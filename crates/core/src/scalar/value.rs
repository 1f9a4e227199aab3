//! Type-erased scalar values

use super::ScalarKind;
use serde::{Deserialize, Serialize};

/// A scalar of any kind, erased to a single type.
///
/// This is the boxed/generic form of every primitive scalar: conversion in
/// is total (`From`), conversion out fails with
/// [`Error::ScalarKind`](crate::Error::ScalarKind) when the kinds differ.
///
/// In serialized form finite floats are JSON numbers and the non-finite ones
/// are the strings `"NaN"`, `"inf"` and `"-inf"`, so every value reads back.
/// NaN payloads are not preserved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum ScalarValue {
    Boolean(bool),
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(#[serde(with = "non_finite")] f32),
    Double(#[serde(with = "non_finite")] f64),
    Char(char),
}

mod non_finite {
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    const NAN: &str = "NaN";
    const INFINITY: &str = "inf";
    const NEG_INFINITY: &str = "-inf";

    pub trait Float: Copy + Serialize {
        const NAN: Self;
        const INFINITY: Self;
        const NEG_INFINITY: Self;

        fn is_nan(self) -> bool;
        fn is_infinite(self) -> bool;
        fn is_sign_negative(self) -> bool;
    }

    macro_rules! impl_float {
        ($($t:ty),*) => {
            $(
                impl Float for $t {
                    const NAN: Self = <$t>::NAN;
                    const INFINITY: Self = <$t>::INFINITY;
                    const NEG_INFINITY: Self = <$t>::NEG_INFINITY;

                    fn is_nan(self) -> bool {
                        <$t>::is_nan(self)
                    }

                    fn is_infinite(self) -> bool {
                        <$t>::is_infinite(self)
                    }

                    fn is_sign_negative(self) -> bool {
                        <$t>::is_sign_negative(self)
                    }
                }
            )*
        };
    }

    impl_float!(f32, f64);

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr<T> {
        Number(T),
        Literal(String),
    }

    pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Float,
        S: Serializer,
    {
        let value = *value;
        if value.is_nan() {
            serializer.serialize_str(NAN)
        } else if value.is_infinite() && value.is_sign_negative() {
            serializer.serialize_str(NEG_INFINITY)
        } else if value.is_infinite() {
            serializer.serialize_str(INFINITY)
        } else {
            value.serialize(serializer)
        }
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: Float + Deserialize<'de>,
        D: Deserializer<'de>,
    {
        match Repr::<T>::deserialize(deserializer)? {
            Repr::Number(value) => Ok(value),
            Repr::Literal(literal) => match literal.as_str() {
                NAN => Ok(T::NAN),
                INFINITY => Ok(T::INFINITY),
                NEG_INFINITY => Ok(T::NEG_INFINITY),
                other => Err(de::Error::custom(format!(
                    "expected a number, \"{NAN}\", \"{INFINITY}\" or \"{NEG_INFINITY}\", found \"{other}\""
                ))),
            },
        }
    }
}

impl ScalarValue {
    /// The kind of scalar held
    pub const fn kind(&self) -> ScalarKind {
        match self {
            ScalarValue::Boolean(_) => ScalarKind::Boolean,
            ScalarValue::Byte(_) => ScalarKind::Byte,
            ScalarValue::Short(_) => ScalarKind::Short,
            ScalarValue::Int(_) => ScalarKind::Int,
            ScalarValue::Long(_) => ScalarKind::Long,
            ScalarValue::Float(_) => ScalarKind::Float,
            ScalarValue::Double(_) => ScalarKind::Double,
            ScalarValue::Char(_) => ScalarKind::Char,
        }
    }

    /// Bit-identical comparison; unlike `==`, NaN equals itself
    pub fn bit_eq(&self, other: &ScalarValue) -> bool {
        match (self, other) {
            (ScalarValue::Float(a), ScalarValue::Float(b)) => a.to_bits() == b.to_bits(),
            (ScalarValue::Double(a), ScalarValue::Double(b)) => a.to_bits() == b.to_bits(),
            _ => self == other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_kind_matches_variant() {
        assert_eq!(ScalarValue::Int(4).kind(), ScalarKind::Int);
        assert_eq!(ScalarValue::Char('z').kind(), ScalarKind::Char);
        assert_eq!(ScalarValue::Double(0.5).kind(), ScalarKind::Double);
    }

    #[test]
    fn test_nan_bit_eq() {
        let nan = ScalarValue::Double(f64::NAN);
        assert_ne!(nan, nan);
        assert!(nan.bit_eq(&nan));
        assert!(!ScalarValue::Float(0.0).bit_eq(&ScalarValue::Float(-0.0)));
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_string(&ScalarValue::Long(-9)).unwrap();
        assert_eq!(json, r#"{"kind":"long","value":-9}"#);

        let json = serde_json::to_string(&ScalarValue::Double(f64::NAN)).unwrap();
        assert_eq!(json, r#"{"kind":"double","value":"NaN"}"#);
        let json = serde_json::to_string(&ScalarValue::Float(0.5)).unwrap();
        assert_eq!(json, r#"{"kind":"float","value":0.5}"#);
    }

    #[rstest]
    #[case::double_nan(ScalarValue::Double(f64::NAN))]
    #[case::double_inf(ScalarValue::Double(f64::INFINITY))]
    #[case::double_neg_inf(ScalarValue::Double(f64::NEG_INFINITY))]
    #[case::double_neg_zero(ScalarValue::Double(-0.0))]
    #[case::double_finite(ScalarValue::Double(-2.5))]
    #[case::float_nan(ScalarValue::Float(f32::NAN))]
    #[case::float_inf(ScalarValue::Float(f32::INFINITY))]
    #[case::float_neg_inf(ScalarValue::Float(f32::NEG_INFINITY))]
    #[case::float_neg_zero(ScalarValue::Float(-0.0))]
    #[case::float_finite(ScalarValue::Float(0.25))]
    fn test_json_keeps_float_bits(#[case] value: ScalarValue) {
        let json = serde_json::to_string(&value).unwrap();
        let back: ScalarValue = serde_json::from_str(&json).unwrap();
        assert!(back.bit_eq(&value), "{json} read back as {back:?}");
    }

    #[test]
    fn test_json_rejects_unknown_float_literal() {
        let err = serde_json::from_str::<ScalarValue>(r#"{"kind":"double","value":"huge"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("huge"));
    }
}
