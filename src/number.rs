//! Numeric value model.
//!
//! A [`Number`] is either an integer or a floating-point value. Integer
//! arithmetic is checked: an operation that would overflow `i64` produces a
//! float instead of wrapping or panicking. Sums are exact over the whole
//! sequence: only the final total has to fit in `i64`.
//!
//! JSON has no encoding for infinities or NaN, so non-finite floats are
//! written as the strings `"inf"`, `"-inf"` and `"NaN"`.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::ops::Add;

/// An integer or floating-point value.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Extract a number from a JSON value.
    ///
    /// Only JSON numbers qualify; booleans, strings and the rest return `None`.
    /// Integers outside the `i64` range become floats.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n
                .as_i64()
                .map(Number::Int)
                .or_else(|| n.as_f64().map(Number::Float)),
            _ => None,
        }
    }

    /// The value as a float.
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    /// Whether the value is strictly greater than zero.
    pub fn is_positive(self) -> bool {
        match self {
            Number::Int(i) => i > 0,
            Number::Float(f) => f > 0.0,
        }
    }

    /// Twice the value.
    pub fn doubled(self) -> Self {
        match self {
            Number::Int(i) => i
                .checked_mul(2)
                .map(Number::Int)
                .unwrap_or(Number::Float(i as f64 * 2.0)),
            Number::Float(f) => Number::Float(f * 2.0),
        }
    }
}

impl Default for Number {
    fn default() -> Self {
        Number::Int(0)
    }
}

impl Add for Number {
    type Output = Number;

    fn add(self, rhs: Number) -> Number {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => a
                .checked_add(b)
                .map(Number::Int)
                .unwrap_or(Number::Float(a as f64 + b as f64)),
            (a, b) => Number::Float(a.as_f64() + b.as_f64()),
        }
    }
}

/// Running total: exact while every element so far is an integer.
enum Total {
    Exact(i128),
    Approx(f64),
}

impl std::iter::Sum for Number {
    fn sum<I: Iterator<Item = Number>>(iter: I) -> Self {
        let mut total = Total::Exact(0);

        for n in iter {
            total = match (total, n) {
                (Total::Exact(acc), Number::Int(i)) => acc
                    .checked_add(i128::from(i))
                    .map_or(Total::Approx(acc as f64 + i as f64), Total::Exact),
                (Total::Exact(acc), Number::Float(f)) => Total::Approx(acc as f64 + f),
                (Total::Approx(acc), n) => Total::Approx(acc + n.as_f64()),
            };
        }

        match total {
            Total::Exact(acc) => i64::try_from(acc).map_or(Number::Float(acc as f64), Number::Int),
            Total::Approx(f) => Number::Float(f),
        }
    }
}

/// String form of a float JSON cannot represent as a number.
fn non_finite_label(f: f64) -> Option<&'static str> {
    if f.is_nan() {
        Some("NaN")
    } else if f == f64::INFINITY {
        Some("inf")
    } else if f == f64::NEG_INFINITY {
        Some("-inf")
    } else {
        None
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Number::Int(i) => serializer.serialize_i64(i),
            Number::Float(f) => match non_finite_label(f) {
                Some(label) => serializer.serialize_str(label),
                None => serializer.serialize_f64(f),
            },
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{}", i),
            // Debug keeps the fractional part: 3.0 rather than 3
            Number::Float(x) => write!(f, "{:?}", x),
        }
    }
}

impl From<i64> for Number {
    fn from(i: i64) -> Self {
        Number::Int(i)
    }
}

impl From<f64> for Number {
    fn from(f: f64) -> Self {
        Number::Float(f)
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        match n {
            Number::Int(i) => Value::from(i),
            Number::Float(f) => match non_finite_label(f) {
                Some(label) => Value::from(label),
                None => Value::from(f),
            },
        }
    }
}

/// Format numbers as a bracketed list: `[1, 2, 3]`.
pub fn format_list(numbers: &[Number]) -> String {
    let items: Vec<String> = numbers.iter().map(|n| n.to_string()).collect();
    format!("[{}]", items.join(", "))
}
