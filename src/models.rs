//! Data models for operation results.
//!
//! This module contains the structures used to describe what was run,
//! on which input, and how it turned out.

use crate::error::Error;
use crate::number::Number;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// A numeric operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Sum every element.
    Sum,
    /// Keep the positive elements and double them.
    Process,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Sum => write!(f, "sum"),
            Operation::Process => write!(f, "process"),
        }
    }
}

/// Value produced by a successful operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OutputValue {
    Number(Number),
    List(Vec<Number>),
}

impl fmt::Display for OutputValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputValue::Number(n) => write!(f, "{}", n),
            OutputValue::List(items) => write!(f, "{}", crate::number::format_list(items)),
        }
    }
}

/// How an operation ended.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome {
    /// The operation produced a value.
    Ok { value: OutputValue },
    /// The input violated the operation's contract.
    Rejected { kind: &'static str, message: String },
}

impl Outcome {
    /// Returns true if the input was rejected.
    pub fn is_rejected(&self) -> bool {
        matches!(self, Outcome::Rejected { .. })
    }
}

impl From<Error> for Outcome {
    fn from(err: Error) -> Self {
        Outcome::Rejected {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

/// Metadata about a report.
#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadata {
    /// Version of the tool that produced the report.
    pub tool_version: &'static str,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
}

impl Default for ReportMetadata {
    fn default() -> Self {
        Self {
            tool_version: env!("CARGO_PKG_VERSION"),
            generated_at: Utc::now(),
        }
    }
}

/// The result of running one operation on one input.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Metadata about the report.
    pub metadata: ReportMetadata,
    /// Which operation ran.
    pub operation: Operation,
    /// The input as received.
    pub input: Value,
    /// What came out.
    pub outcome: Outcome,
}

impl Report {
    /// Creates a new report stamped with the current time.
    pub fn new(operation: Operation, input: Value, outcome: Outcome) -> Self {
        Self {
            metadata: ReportMetadata::default(),
            operation,
            input,
            outcome,
        }
    }
}
