use thiserror::Error;

/// Alias for `Result<T, QvError>`.
pub type QvResult<T> = Result<T, QvError>;

/// Errors that can occur when parsing domain values from user input.
#[derive(Debug, Error)]
pub enum QvError {
    /// The string does not name one of the eight life dimensions.
    #[error("unknown dimension: \"{0}\"")]
    UnknownDimension(String),

    /// The string is not a valid quest status.
    #[error("unknown quest status: \"{0}\" (expected active or completed)")]
    UnknownStatus(String),

    /// The string is not a valid record identifier.
    #[error("invalid id: \"{0}\"")]
    InvalidId(String),
}
