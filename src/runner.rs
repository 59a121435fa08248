//! Runs operations and the demonstration, producing reports.

use crate::config::DemoConfig;
use crate::models::{Operation, Outcome, OutputValue, Report};
use crate::processor;
use serde_json::Value;
use tracing::debug;

/// Run one operation on a JSON input.
///
/// A contract violation is recorded in the report's outcome rather than
/// returned as an error.
pub fn run_operation(operation: Operation, input: Value) -> Report {
    debug!("Running {} on {}", operation, input);

    let outcome = match operation {
        Operation::Sum => processor::sum(&input).map(OutputValue::Number),
        Operation::Process => processor::process(&input).map(OutputValue::List),
    }
    .map_or_else(Outcome::from, |value| Outcome::Ok { value });

    Report::new(operation, input, outcome)
}

/// Run the fixed demonstration: a sum, a filter/double, and a sum on a
/// non-sequence input that is expected to be rejected.
pub fn run_demo(demo: &DemoConfig) -> Vec<Report> {
    let numbers = Value::Array(demo.numbers.iter().copied().map(Value::from).collect());
    let mixed = Value::Array(demo.mixed.iter().copied().map(Value::from).collect());
    let invalid = Value::String(demo.invalid.clone());

    vec![
        run_operation(Operation::Sum, numbers),
        run_operation(Operation::Process, mixed),
        run_operation(Operation::Sum, invalid),
    ]
}
