use thiserror::Error;

/// Error taxonomy shared by every service and repository.
///
/// Nothing here is retried: each operation is a single best-effort attempt
/// against the database or object store, and the failure is surfaced as-is.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid value for field '{field}'")]
    Validation { field: String },

    #[error("resource not found")]
    NotFound,

    #[error("unauthorized")]
    Unauthorized,

    #[error("query '{operation}' failed")]
    Query { operation: String },

    #[error("object storage error: {0}")]
    ObjectStorage(String),

    #[error("invalid image: {0}")]
    InvalidImage(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl CoreError {
    pub fn validation(field: impl Into<String>) -> Self {
        CoreError::Validation {
            field: field.into(),
        }
    }

    pub fn query(operation: impl Into<String>) -> Self {
        CoreError::Query {
            operation: operation.into(),
        }
    }
}
