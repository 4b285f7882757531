//! Unified error handling for PhoneBill
//!
//! Every failure in the billing pipeline is fatal for the whole computation,
//! so a single error type carries enough context (line number, offending
//! text) for the caller to report it.

use thiserror::Error;

/// Main application error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    // ==================== Call Log Errors ====================
    #[error("Malformed call record on line {line}: expected 3 comma-separated fields, found {fields}")]
    MalformedLine { line: usize, fields: usize },

    #[error("Invalid timestamp on line {line}: '{value}' does not match dd-mm-yyyy HH:MM:SS")]
    TimestampFormat { line: usize, value: String },

    #[error("Invalid call interval on line {line}: end {end} precedes start {start}")]
    InvalidInterval {
        line: usize,
        start: String,
        end: String,
    },

    #[error("Invalid phone number: '{0}' is not a non-negative integer")]
    InvalidNumber(String),

    // ==================== Environment Errors ====================
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl AppError {
    /// Returns the stable error code used in logs and JSON output
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::MalformedLine { .. } => "malformed_line",
            AppError::TimestampFormat { .. } => "timestamp_format",
            AppError::InvalidInterval { .. } => "invalid_interval",
            AppError::InvalidNumber(_) => "invalid_number",
            AppError::Config(_) => "config_error",
            AppError::Io(_) => "io_error",
        }
    }

    /// True when the error was caused by the contents of the call log
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            AppError::MalformedLine { .. }
                | AppError::TimestampFormat { .. }
                | AppError::InvalidInterval { .. }
                | AppError::InvalidNumber(_)
        )
    }

    /// Line of the call log the error refers to, if any
    pub fn line(&self) -> Option<usize> {
        match self {
            AppError::MalformedLine { line, .. }
            | AppError::TimestampFormat { line, .. }
            | AppError::InvalidInterval { line, .. } => Some(*line),
            _ => None,
        }
    }
}

// ==================== From implementations ====================

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AppError::MalformedLine { line: 1, fields: 2 }.error_code(),
            "malformed_line"
        );
        assert_eq!(
            AppError::InvalidNumber("12a".to_string()).error_code(),
            "invalid_number"
        );
        assert_eq!(AppError::Config("x".to_string()).error_code(), "config_error");
    }

    #[test]
    fn test_input_errors() {
        assert!(AppError::TimestampFormat {
            line: 3,
            value: "2024-01-01".to_string()
        }
        .is_input_error());
        assert!(!AppError::Io("broken pipe".to_string()).is_input_error());
    }

    #[test]
    fn test_error_line() {
        let err = AppError::InvalidInterval {
            line: 7,
            start: "01-01-2024 09:00:00".to_string(),
            end: "01-01-2024 08:00:00".to_string(),
        };
        assert_eq!(err.line(), Some(7));
        assert_eq!(AppError::InvalidNumber("x".to_string()).line(), None);
    }

    #[test]
    fn test_error_messages() {
        let err = AppError::MalformedLine { line: 2, fields: 4 };
        assert_eq!(
            err.to_string(),
            "Malformed call record on line 2: expected 3 comma-separated fields, found 4"
        );
    }

    #[test]
    fn test_from_config_error() {
        let err: AppError = config::ConfigError::Message("bad level".to_string()).into();
        assert_eq!(err, AppError::Config("bad level".to_string()));
        assert_eq!(err.error_code(), "config_error");
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "calls.log");
        let err: AppError = io.into();
        assert_eq!(err.error_code(), "io_error");
    }
}
