//! Summation and positive-value filtering.
//!
//! The JSON-facing operations validate the shape of their input before doing
//! any arithmetic. `sum` rejects non-numeric elements while `process` silently
//! drops them.

use crate::error::{value_kind, Error, Result};
use crate::number::Number;
use serde_json::Value;
use tracing::{debug, info};

/// Sum a sequence of numbers.
///
/// Returns integer zero for an empty sequence.
///
/// # Errors
///
/// - [`Error::InvalidInputType`] if `numbers` is not an array.
/// - [`Error::InvalidElementType`] for the first element that is not a number.
pub fn sum(numbers: &Value) -> Result<Number> {
    let items = as_sequence(numbers)?;

    let mut typed = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        match Number::from_value(item) {
            Some(n) => typed.push(n),
            None => {
                debug!("Rejecting non-numeric element at index {}", index);
                return Err(Error::InvalidElementType {
                    index,
                    found: value_kind(item),
                });
            }
        }
    }

    Ok(sum_numbers(&typed))
}

/// Sum an already-typed slice of numbers.
pub fn sum_numbers(numbers: &[Number]) -> Number {
    let result: Number = numbers.iter().copied().sum();
    info!("Sum calculated: {}", result);
    result
}

/// Keep the strictly positive numbers of a sequence and double them.
///
/// Non-numeric and non-positive elements are dropped; order is preserved.
///
/// # Errors
///
/// [`Error::InvalidInputType`] if `data` is not an array.
pub fn process(data: &Value) -> Result<Vec<Number>> {
    let items = as_sequence(data)?;

    let processed: Vec<Number> = items
        .iter()
        .filter_map(Number::from_value)
        .filter_map(double_if_positive)
        .collect();

    log_processed(items.len(), processed.len());
    Ok(processed)
}

/// Typed counterpart of [`process`].
pub fn process_numbers(data: &[Number]) -> Vec<Number> {
    let processed: Vec<Number> = data.iter().copied().filter_map(double_if_positive).collect();

    log_processed(data.len(), processed.len());
    processed
}

fn as_sequence(value: &Value) -> Result<&[Value]> {
    match value {
        Value::Array(items) => Ok(items.as_slice()),
        other => {
            debug!("Rejecting {} input, expected an array", value_kind(other));
            Err(Error::InvalidInputType {
                found: value_kind(other),
            })
        }
    }
}

fn double_if_positive(n: Number) -> Option<Number> {
    n.is_positive().then(|| n.doubled())
}

fn log_processed(input: usize, output: usize) {
    info!(
        "Processed {} items, returned {} positive values",
        input, output
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ints(values: &[i64]) -> Vec<Number> {
        values.iter().copied().map(Number::Int).collect()
    }

    #[test]
    fn test_sum_empty() {
        assert_eq!(sum(&json!([])).unwrap(), Number::Int(0));
    }

    #[test]
    fn test_sum_integers() {
        assert_eq!(sum(&json!([1, 2, 3, 4, 5])).unwrap(), Number::Int(15));
    }

    #[test]
    fn test_sum_mixed_int_and_float() {
        assert_eq!(sum(&json!([1, 2.5, -0.5])).unwrap(), Number::Float(3.0));
    }

    #[test]
    fn test_sum_rejects_string_input() {
        let err = sum(&json!("not a list")).unwrap_err();
        assert_eq!(err, Error::InvalidInputType { found: "string" });
    }

    #[test]
    fn test_sum_rejects_mapping_and_scalar() {
        assert!(matches!(
            sum(&json!({"a": 1})),
            Err(Error::InvalidInputType { found: "object" })
        ));
        assert!(matches!(
            sum(&json!(5)),
            Err(Error::InvalidInputType { found: "number" })
        ));
    }

    #[test]
    fn test_sum_rejects_non_numeric_element() {
        let err = sum(&json!([1, "a", 3])).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidElementType {
                index: 1,
                found: "string"
            }
        );
    }

    #[test]
    fn test_sum_rejects_boolean_element() {
        let err = sum(&json!([true, 1])).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidElementType {
                index: 0,
                found: "boolean"
            }
        );
    }

    #[test]
    fn test_sum_numbers_overflow_promotes() {
        let total = sum_numbers(&ints(&[i64::MAX, 1]));
        assert!(matches!(total, Number::Float(_)));
    }

    #[test]
    fn test_sum_exact_across_intermediate_overflow() {
        assert_eq!(
            sum(&json!([i64::MAX, 1, -1])).unwrap(),
            Number::Int(i64::MAX)
        );
        assert_eq!(
            sum(&json!([1, -1, i64::MAX])).unwrap(),
            sum(&json!([i64::MAX, 1, -1])).unwrap()
        );
    }

    #[test]
    fn test_process_filters_and_doubles() {
        assert_eq!(
            process(&json!([-2, -1, 0, 1, 2, 3])).unwrap(),
            ints(&[2, 4, 6])
        );
    }

    #[test]
    fn test_process_empty() {
        assert!(process(&json!([])).unwrap().is_empty());
    }

    #[test]
    fn test_process_drops_non_numeric() {
        let out = process(&json!([1, "a", null, true, 2.5, [3], -4])).unwrap();
        assert_eq!(out, vec![Number::Int(2), Number::Float(5.0)]);
    }

    #[test]
    fn test_process_rejects_non_sequence() {
        assert_eq!(
            process(&json!("abc")).unwrap_err(),
            Error::InvalidInputType { found: "string" }
        );
        assert_eq!(
            process(&json!(null)).unwrap_err(),
            Error::InvalidInputType { found: "null" }
        );
    }

    #[test]
    fn test_process_numbers_matches_process() {
        let typed = process_numbers(&ints(&[3, -3, 0, 7]));
        let dynamic = process(&json!([3, -3, 0, 7])).unwrap();
        assert_eq!(typed, dynamic);
    }

    #[test]
    fn test_repeated_calls_are_stable() {
        let input = json!([5, -1, 2.5, 0]);
        assert_eq!(sum(&input).unwrap(), sum(&input).unwrap());
        assert_eq!(process(&input).unwrap(), process(&input).unwrap());
    }
}
