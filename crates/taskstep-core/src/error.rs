//! Error types for record construction.

use thiserror::Error;

/// Errors raised while building a [`Step`](crate::Step) or
/// [`Task`](crate::Task) from a dynamic configuration.
#[derive(Error, Debug)]
pub enum TaskError {
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> TaskError {
        TaskError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl TaskError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }
}

/// Result type alias for construction operations
pub type Result<T> = std::result::Result<T, TaskError>;
