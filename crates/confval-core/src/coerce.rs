//! Typed extraction from a [`Value`].
//!
//! The conversion table is fixed:
//!
//! | from \ to | `bool` | float | integer | `String` |
//! |---|---|---|---|---|
//! | Bool | exact | `1.0` / `0.0` | `1` / `0` | `"true"` / `"false"` |
//! | Number | `0.0` is false, anything else true | exact | truncated toward zero | canonical text |
//! | String | exactly `"true"` / `"false"` | numeric literal | numeric literal, truncated | exact |
//! | Null, List, Dict | mismatch | mismatch | mismatch | mismatch |
//!
//! Integer targets are range-checked after truncation.

use crate::encoder::format_number;
use crate::error::CoercionError;
use crate::value::Value;

/// A type that can be extracted from a [`Value`] under the coercion table.
pub trait FromValue: Sized {
    fn from_value(value: &Value) -> Result<Self, CoercionError>;
}

impl Value {
    /// Convert this node to `T`. Failure is reported, never defaulted.
    pub fn coerce<T: FromValue>(&self) -> Result<T, CoercionError> {
        T::from_value(self)
    }

    /// Convert this node to `T`, falling back to `default` on any failure.
    pub fn coerce_or<T: FromValue>(&self, default: T) -> T {
        T::from_value(self).unwrap_or(default)
    }
}

/// Parse a complete numeric literal. Surrounding whitespace, `inf`, `NaN`
/// and literals that overflow to infinity are rejected.
pub(crate) fn parse_number_literal(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|n| n.is_finite())
}

fn mismatch(expected: &'static str, value: &Value) -> CoercionError {
    CoercionError::TypeMismatch {
        expected,
        found: value.kind(),
    }
}

/// Numeric view shared by the float and integer targets.
fn to_number(value: &Value, expected: &'static str) -> Result<f64, CoercionError> {
    match value {
        Value::Number(n) => Ok(*n),
        Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => parse_number_literal(s).ok_or_else(|| mismatch(expected, value)),
        _ => Err(mismatch(expected, value)),
    }
}

impl FromValue for bool {
    fn from_value(value: &Value) -> Result<Self, CoercionError> {
        match value {
            Value::Bool(b) => Ok(*b),
            Value::Number(n) => Ok(*n != 0.0),
            Value::String(s) => match s.as_str() {
                "true" => Ok(true),
                "false" => Ok(false),
                _ => Err(mismatch("bool", value)),
            },
            _ => Err(mismatch("bool", value)),
        }
    }
}

impl FromValue for f64 {
    fn from_value(value: &Value) -> Result<Self, CoercionError> {
        to_number(value, "f64")
    }
}

impl FromValue for f32 {
    fn from_value(value: &Value) -> Result<Self, CoercionError> {
        to_number(value, "f32").map(|n| n as f32)
    }
}

macro_rules! impl_from_value_int {
    ($($ty:ident)+) => {
        $(
            impl FromValue for $ty {
                fn from_value(value: &Value) -> Result<Self, CoercionError> {
                    let n = to_number(value, stringify!($ty))?;
                    let truncated = n.trunc();
                    // MAX as f64 may round up to the next power of two, so the
                    // upper bound is exclusive.
                    let in_range = truncated >= $ty::MIN as f64
                        && truncated < ($ty::MAX as f64) + 1.0;
                    if !n.is_finite() || !in_range {
                        return Err(CoercionError::OutOfRange {
                            target: stringify!($ty),
                            value: n,
                        });
                    }
                    Ok(truncated as $ty)
                }
            }
        )+
    };
}

impl_from_value_int! { i8 i16 i32 i64 isize u8 u16 u32 u64 usize }

impl FromValue for String {
    fn from_value(value: &Value) -> Result<Self, CoercionError> {
        match value {
            Value::String(s) => Ok(s.clone()),
            Value::Bool(b) => Ok(b.to_string()),
            Value::Number(n) => Ok(format_number(*n)),
            _ => Err(mismatch("string", value)),
        }
    }
}
