use thiserror::Error;

#[derive(Error, Debug)]
pub enum SalonError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// A data-store operation failed. The message is fixed per operation and
    /// safe to show to callers; the underlying cause is logged where it occurs.
    #[error("{0}")]
    OperationFailed(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),

    #[error("Internal server error: {0}")]
    Internal(String),
}

pub type SalonResult<T> = Result<T, SalonError>;
