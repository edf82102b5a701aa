//! Error types for field processing.

use thiserror::Error;

/// Errors that can occur while constructing or combining fields.
#[derive(Error, Debug)]
pub enum FieldError {
    /// Two fields with unequal domains were combined.
    #[error("domain mismatch: {left} vs {right}")]
    DomainMismatch { left: String, right: String },

    /// Grid geometry rejected at construction time.
    #[error("invalid grid geometry: {0}")]
    InvalidGridGeometry(String),

    /// Value array length does not match the domain shape.
    #[error("field has {actual} values, domain expects {expected}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// Invalid domain/projection metadata.
    #[error("invalid metadata: {0}")]
    InvalidMetadata(String),

    /// Coordinate transform failure.
    #[error("projection error: {0}")]
    Projection(#[from] projection::ProjectionError),
}

impl FieldError {
    /// Create a DomainMismatch error from two domain descriptions.
    pub fn domain_mismatch(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self::DomainMismatch {
            left: left.into(),
            right: right.into(),
        }
    }

    /// Create an InvalidGridGeometry error.
    pub fn invalid_geometry(msg: impl Into<String>) -> Self {
        Self::InvalidGridGeometry(msg.into())
    }
}

impl From<serde_json::Error> for FieldError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidMetadata(err.to_string())
    }
}

/// Result type for field processing operations.
pub type Result<T> = std::result::Result<T, FieldError>;
