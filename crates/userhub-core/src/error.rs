//! Shared error type across userhub crates.

use thiserror::Error;

use crate::model::UserId;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed request.
    BadRequest,
    /// Requested record does not exist.
    NotFound,
    /// Rejected by admission control.
    RateLimited,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::RateLimited => "RATE_LIMITED",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, UserHubError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum UserHubError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("user not found: {0}")]
    NotFound(UserId),
    #[error("rate limited")]
    RateLimited,
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl UserHubError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            UserHubError::BadRequest(_) => ClientCode::BadRequest,
            UserHubError::NotFound(_) => ClientCode::NotFound,
            UserHubError::RateLimited => ClientCode::RateLimited,
            UserHubError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            UserHubError::Internal(_) => ClientCode::Internal,
        }
    }
}
