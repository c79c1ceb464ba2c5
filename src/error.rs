//! Error types for the log generator.
//!
//! The synthetic errors the generator prints are log *content*; the variants
//! here are real failures of the generator process itself.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LogGenError {
    #[error("I/O operation failed: {operation}")]
    Io {
        operation: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization failed: {context}")]
    Serialization {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Weighted table needs at least one entry with a non-zero weight")]
    EmptyTable,
}

impl LogGenError {
    pub fn io(operation: &'static str, source: std::io::Error) -> Self {
        Self::Io { operation, source }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LogGenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_keeps_source() {
        let err = LogGenError::io(
            "write primary stream",
            std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed"),
        );

        assert_eq!(err.to_string(), "I/O operation failed: write primary stream");
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "pipe closed");
    }

    #[test]
    fn test_config_error_message() {
        let err = LogGenError::config("min_delay_secs (5) exceeds max_delay_secs (2)");
        assert!(err.to_string().starts_with("Configuration error: min_delay_secs"));
    }
}
