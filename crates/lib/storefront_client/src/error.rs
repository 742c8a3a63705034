//! Client error types.

use storefront_core::session::SessionError;
use thiserror::Error;

/// Convenience alias for client call results.
pub type ClientResult<T> = Result<T, ClientError>;

/// Everything that can go wrong talking to the API.
///
/// Front-ends generally collapse these into one "something went wrong"
/// message; the detail is for logs.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx reply. `message` is the JSON body's `message` when present,
    /// otherwise `HTTP {status}`.
    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("unexpected response body: {0}")]
    Decode(String),

    #[error("login rejected: {0}")]
    LoginRejected(String),

    #[error("no {0} stored; log in first")]
    NotAuthenticated(&'static str),

    #[error("session storage: {0}")]
    Session(#[from] SessionError),
}

impl ClientError {
    /// HTTP status for [`ClientError::Status`].
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
