//! Error types for the json2sql transcoding pipeline.
//!
//! - [`InputError`] - reading and decoding the JSON record file
//! - [`OutputError`] - writing the generated SQL script
//! - [`PipelineError`] - top-level orchestration errors
//!
//! Date anomalies are deliberately absent: the date normalizer falls back to
//! `NULL` instead of failing (see [`crate::sql::date`]).
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use thiserror::Error;

// =============================================================================
// Input Errors
// =============================================================================

/// Errors while reading the input record file.
#[derive(Debug, Error)]
pub enum InputError {
    /// Failed to read file (missing, permissions, invalid UTF-8).
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid JSON.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Top level of the document is not an array.
    #[error("Expected a JSON array of records, found {found}")]
    NotAnArray { found: &'static str },

    /// An element of the array is not an object.
    #[error("Record {index} is not a JSON object (found {found})")]
    NotAnObject { index: usize, found: &'static str },

    /// A field holds a nested value (array or object).
    #[error("Record {index}, field '{field}': unsupported {found} value")]
    UnsupportedValue {
        index: usize,
        field: String,
        found: &'static str,
    },
}

// =============================================================================
// Output Errors
// =============================================================================

/// Errors while writing the generated script.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Failed to create or write the temporary file.
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to move the finished file over the destination.
    #[error("Failed to replace output file: {0}")]
    Persist(#[from] tempfile::PersistError),
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level pipeline errors.
///
/// This is the error type returned by [`crate::pipeline::transcode_file`].
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Reading the records failed.
    #[error("{0}")]
    Input(#[from] InputError),

    /// Writing the script failed.
    #[error("{0}")]
    Output(#[from] OutputError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for input operations.
pub type InputResult<T> = Result<T, InputError>;

/// Result type for output operations.
pub type OutputResult<T> = Result<T, OutputError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Human-readable JSON type name, used in error messages.
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_conversion_chain() {
        // InputError -> PipelineError
        let input_err = InputError::NotAnArray { found: "object" };
        let pipeline_err: PipelineError = input_err.into();
        assert!(pipeline_err.to_string().contains("JSON array"));

        // io::Error -> OutputError -> PipelineError
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let pipeline_err: PipelineError = OutputError::from(io).into();
        assert!(pipeline_err.to_string().contains("denied"));
    }

    #[test]
    fn test_unsupported_value_format() {
        let err = InputError::UnsupportedValue {
            index: 3,
            field: "task".into(),
            found: "array",
        };
        let msg = err.to_string();
        assert!(msg.contains("Record 3"));
        assert!(msg.contains("'task'"));
        assert!(msg.contains("array"));
    }

    #[test]
    fn test_json_kind() {
        assert_eq!(json_kind(&json!(null)), "null");
        assert_eq!(json_kind(&json!(1.5)), "number");
        assert_eq!(json_kind(&json!({"a": 1})), "object");
    }
}
