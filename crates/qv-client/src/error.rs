use thiserror::Error;

/// Alias for `Result<T, ClientError>`.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur while talking to the QuestVault API or managing the
/// local session.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The operation requires a bearer token and none is stored.
    #[error("not logged in (run `qv login` first)")]
    NotAuthenticated,

    /// Transport-level failure: connection refused, DNS, TLS, decode.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server returned {status}: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Server-provided detail, or the raw body when none.
        message: String,
    },

    /// Reading or writing the token file failed.
    #[error("session store error: {0}")]
    SessionStore(#[from] std::io::Error),
}

impl ClientError {
    /// True for a 401, meaning the stored token is no longer accepted.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Api { status: 401, .. })
    }
}
