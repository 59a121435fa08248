//! Text and JSON report generation.
//!
//! Text output mirrors what a person would type at a REPL: lists print as
//! `[1, 2, 3]` and floats keep their fractional part.

use crate::models::{Operation, Outcome, Report};
use anyhow::Result;
use serde_json::Value;

/// Header printed before the demonstration reports.
pub const DEMO_HEADER: &str = "=== Math Processor Demo ===";

/// Generate the one-line text form of a report.
pub fn generate_text_line(report: &Report) -> String {
    let input = display_value(&report.input);

    match (&report.outcome, report.operation) {
        (Outcome::Ok { value }, Operation::Sum) => format!("Sum of {}: {}", input, value),
        (Outcome::Ok { value }, Operation::Process) => format!("Processed {}: {}", input, value),
        (Outcome::Rejected { message, .. }, _) => format!("Caught expected error: {}", message),
    }
}

/// Generate the text form of a demonstration run.
pub fn generate_demo_text(reports: &[Report]) -> String {
    let mut output = String::new();

    output.push_str(DEMO_HEADER);
    output.push('\n');

    for report in reports {
        output.push_str(&generate_text_line(report));
        output.push('\n');
    }

    output
}

/// Generate a JSON report.
pub fn generate_json_report(report: &Report) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(Into::into)
}

/// Generate a JSON array of reports.
pub fn generate_json_reports(reports: &[Report]) -> Result<String> {
    serde_json::to_string_pretty(reports).map_err(Into::into)
}

/// Render a JSON value with list items separated by `, `.
fn display_value(value: &Value) -> String {
    match value {
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().map(display_value).collect();
            format!("[{}]", parts.join(", "))
        }
        other => other.to_string(),
    }
}
