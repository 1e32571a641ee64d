//! Error types for the rolling and costing engine.
//!
//! Computation never fails: missing or unusable inputs produce `None`.
//! These errors only come from the edges of the engine (loading records,
//! strict parsing of user choices, relinking services, the save gate).

use std::path::PathBuf;
use thiserror::Error;

/// Error codes for engine failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// File not found (-1)
    FileNotFound = -1,
    /// Empty file (-2)
    EmptyFile = -2,
    /// Record could not be parsed (-3)
    ParseError = -3,
    /// Unknown enum value for a field (E100)
    InvalidValue = 100,
    /// Linked host part does not exist (E200)
    HostNotFound = 200,
    /// Linked host part cannot carry a service (E201)
    InvalidHost = 201,
    /// Part failed its save checklist (E300)
    ValidationFailed = 300,
}

/// Main error type for the engine.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Empty file: {path}")]
    EmptyFile { path: PathBuf },

    #[error("Parse error in {path} at line {line}: {message}")]
    ParseError {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// Well-formed JSON whose records do not have the expected shape.
    #[error("Invalid record in {path}: {message}")]
    InvalidRecord { path: PathBuf, message: String },

    #[error("Invalid value for '{field}': expected {expected}, got '{value}'")]
    InvalidValue {
        field: String,
        expected: String,
        value: String,
    },

    #[error("Linked part not found: id={part_id}")]
    HostNotFound { part_id: i64 },

    #[error("Part {part_id} cannot be linked: {reason}")]
    InvalidHost { part_id: i64, reason: String },

    #[error("Part failed validation: {}", .messages.join("; "))]
    ValidationFailed { messages: Vec<String> },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl EngineError {
    /// Shorthand for an `InvalidValue` error.
    pub fn invalid_value(
        field: impl Into<String>,
        expected: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        EngineError::InvalidValue {
            field: field.into(),
            expected: expected.into(),
            value: value.into(),
        }
    }

    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            EngineError::FileNotFound { .. } => ErrorCode::FileNotFound,
            EngineError::EmptyFile { .. } => ErrorCode::EmptyFile,
            EngineError::ParseError { .. } | EngineError::InvalidRecord { .. } => {
                ErrorCode::ParseError
            }
            EngineError::InvalidValue { .. } => ErrorCode::InvalidValue,
            EngineError::HostNotFound { .. } => ErrorCode::HostNotFound,
            EngineError::InvalidHost { .. } => ErrorCode::InvalidHost,
            EngineError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            EngineError::Io(_) => ErrorCode::FileNotFound,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = EngineError::HostNotFound { part_id: 7 };
        assert_eq!(err.code(), ErrorCode::HostNotFound);
        assert_eq!(err.code_value(), 200);

        let err = EngineError::EmptyFile {
            path: PathBuf::from("parts.json"),
        };
        assert_eq!(err.code_value(), -2);
    }

    #[test]
    fn test_invalid_record_has_no_line() {
        let err = EngineError::InvalidRecord {
            path: PathBuf::from("order.json"),
            message: "invalid type: string \"x\", expected a sequence".to_string(),
        };
        assert_eq!(err.code(), ErrorCode::ParseError);
        assert_eq!(
            err.to_string(),
            "Invalid record in order.json: invalid type: string \"x\", expected a sequence"
        );
    }

    #[test]
    fn test_validation_message_joins_items() {
        let err = EngineError::ValidationFailed {
            messages: vec![
                "Thickness is required".to_string(),
                "Roll value is required".to_string(),
            ],
        };
        assert_eq!(
            err.to_string(),
            "Part failed validation: Thickness is required; Roll value is required"
        );
    }

    #[test]
    fn test_invalid_value_display() {
        let err = EngineError::invalid_value("measureType", "radius or diameter", "chord");
        assert_eq!(
            err.to_string(),
            "Invalid value for 'measureType': expected radius or diameter, got 'chord'"
        );
    }
}
