use serde_json::error::Category;
use thiserror::Error;

use crate::codec::fields::INVALID_TIMESTAMP;
use crate::validation::ValidationIssue;

#[derive(Error, Debug)]
pub enum JsonFeedError {
    // Decoding errors
    #[error("Malformed JSON at line {line}, column {column}: {message}")]
    MalformedInput {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("Type mismatch: {message}")]
    TypeMismatch { message: String },

    #[error("Invalid timestamp: {message}")]
    InvalidTimestamp { message: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Document exceeds the {limit} byte limit")]
    DocumentTooLarge { limit: u64 },

    // Strict mode
    #[error("Feed validation failed: {}", format_issues(.0))]
    Validation(Vec<ValidationIssue>),
}

/// Coarse classification of a [`JsonFeedError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MalformedInput,
    TypeMismatch,
    InvalidTimestamp,
    Io,
    DocumentTooLarge,
    Validation,
}

impl JsonFeedError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            JsonFeedError::MalformedInput { .. } => ErrorKind::MalformedInput,
            JsonFeedError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            JsonFeedError::InvalidTimestamp { .. } => ErrorKind::InvalidTimestamp,
            JsonFeedError::Io(_) => ErrorKind::Io,
            JsonFeedError::DocumentTooLarge { .. } => ErrorKind::DocumentTooLarge,
            JsonFeedError::Validation(_) => ErrorKind::Validation,
        }
    }
}

impl From<serde_json::Error> for JsonFeedError {
    fn from(err: serde_json::Error) -> Self {
        let line = err.line();
        let column = err.column();

        match err.classify() {
            // serde_json hands back the reader's own error untouched
            Category::Io => JsonFeedError::Io(std::io::Error::from(err)),
            Category::Syntax | Category::Eof => JsonFeedError::MalformedInput {
                line,
                column,
                message: err.to_string(),
            },
            Category::Data => {
                let message = err.to_string();
                // Relies on fields::timestamp::deserialize putting INVALID_TIMESTAMP
                // first in its custom error message
                if message.starts_with(INVALID_TIMESTAMP) {
                    JsonFeedError::InvalidTimestamp { message }
                } else {
                    JsonFeedError::TypeMismatch { message }
                }
            }
        }
    }
}

fn format_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ValidationIssue::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

pub type JsonFeedResult<T> = Result<T, JsonFeedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_error_is_malformed_input() {
        let err = serde_json::from_str::<serde_json::Value>("{\"title\": ").unwrap_err();
        let err = JsonFeedError::from(err);
        assert_eq!(err.kind(), ErrorKind::MalformedInput);
    }

    #[test]
    fn test_data_error_is_type_mismatch() {
        let err = serde_json::from_str::<Vec<String>>("\"not an array\"").unwrap_err();
        let err = JsonFeedError::from(err);
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        assert!(err.to_string().starts_with("Type mismatch: invalid type"));
    }

    #[test]
    fn test_io_error_is_passed_through() {
        struct BrokenReader;

        impl std::io::Read for BrokenReader {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(
                    std::io::ErrorKind::ConnectionReset,
                    "peer went away",
                ))
            }
        }

        let err = serde_json::from_reader::<_, serde_json::Value>(BrokenReader).unwrap_err();
        let err = JsonFeedError::from(err);

        match err {
            JsonFeedError::Io(inner) => {
                assert_eq!(inner.kind(), std::io::ErrorKind::ConnectionReset);
                assert_eq!(inner.to_string(), "peer went away");
            }
            other => panic!("expected Io, got {:?}", other),
        }
    }

    #[test]
    fn test_validation_error_lists_every_issue() {
        let err = JsonFeedError::Validation(vec![
            ValidationIssue::new("/title", "must not be empty"),
            ValidationIssue::new("/items/0/id", "must not be empty"),
        ]);

        assert_eq!(
            err.to_string(),
            "Feed validation failed: /title: must not be empty; /items/0/id: must not be empty"
        );
    }
}
