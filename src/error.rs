//! Error types for the numeric operations.

use serde_json::Value;

/// Contract violations reported by [`crate::sum`] and [`crate::process`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The top-level argument was not a sequence.
    #[error("Input must be a list, got {found}")]
    InvalidInputType { found: &'static str },

    /// An element of the sequence was not numeric (sum only).
    #[error("All elements must be numeric, got {found} at index {index}")]
    InvalidElementType { index: usize, found: &'static str },
}

impl Error {
    /// Stable snake_case name of the error kind, used in JSON reports.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::InvalidInputType { .. } => "invalid_input_type",
            Error::InvalidElementType { .. } => "invalid_element_type",
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Human-readable name of a JSON value's kind.
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
