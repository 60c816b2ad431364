//! Error types for analytics event construction.

use thiserror::Error;

/// Errors that can occur when building or serializing analytics events.
#[derive(Debug, Error, Clone)]
pub enum EventError {
    /// The payload length does not match the stream schema.
    #[error("arity mismatch for stream {stream}: expected {expected} fields, got {actual}")]
    ArityMismatch {
        stream: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for EventError {
    fn from(err: serde_json::Error) -> Self {
        EventError::Serialization(err.to_string())
    }
}
