//! Error types for lazy stream traversal
//!
//! Only faults raised by the library itself live here. Errors raised by
//! caller-supplied closures are never wrapped: panics unwind through the
//! cursor untouched and `try_for_each` hands back the action's own error.

/// Main error type for lazy stream operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StreamError {
    /// `next_item` was called on a cursor with no element available.
    #[error("cursor exhausted: next_item called without a preceding successful has_next")]
    Exhausted,
    /// A configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for StreamError {
    fn from(err: serde_json::Error) -> Self {
        StreamError::InvalidConfig(err.to_string())
    }
}

/// Result type for lazy stream operations
pub type StreamResult<T> = Result<T, StreamError>;
