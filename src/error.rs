//! Error type for the task client
//!
//! The gateway only ever recovers from one failure, an expired access token.
//! Everything else reaches the caller as one of the variants below.

use reqwest::StatusCode;
use std::fmt;

/// Errors returned by the gateway, the typed client and the credential stores
#[derive(Debug)]
pub enum AppError {
    /// The transport could not complete the round trip
    Network(String),
    /// The transport gave up waiting for the server
    Timeout,
    /// The server rejected a request that had already been replayed with a renewed token
    Unauthorized {
        /// Raw response body
        body: String,
    },
    /// Renewing the access token failed and the session was torn down
    TokenRefresh(Box<AppError>),
    /// A credential required for the operation is not in the store
    MissingCredential(&'static str),
    /// The server returned 404
    NotFound,
    /// The server returned a non-success status other than 404
    Api {
        /// Response status
        status: StatusCode,
        /// Raw response body
        body: String,
    },
    /// JSON encoding or decoding of local data failed
    Json(serde_json::Error),
    /// A response body did not have the expected shape
    Deserialization(String),
    /// File system failure
    Io(std::io::Error),
    /// The caller supplied an unusable value
    InvalidInput(String),
    /// The credential store failed
    Storage(String),
}

impl AppError {
    /// Returns the HTTP status carried by the error, if any
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Unauthorized { .. } => Some(StatusCode::UNAUTHORIZED),
            AppError::NotFound => Some(StatusCode::NOT_FOUND),
            AppError::Api { status, .. } => Some(*status),
            AppError::TokenRefresh(cause) => cause.status(),
            _ => None,
        }
    }

    /// True when the error ended the session
    #[must_use]
    pub fn is_session_expired(&self) -> bool {
        matches!(self, AppError::TokenRefresh(_))
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(msg) => write!(f, "network error: {msg}"),
            AppError::Timeout => write!(f, "request timed out"),
            AppError::Unauthorized { .. } => write!(f, "unauthorized"),
            AppError::TokenRefresh(cause) => write!(f, "token refresh failed: {cause}"),
            AppError::MissingCredential(key) => write!(f, "missing credential: {key}"),
            AppError::NotFound => write!(f, "not found"),
            AppError::Api { status, body } => write!(f, "unexpected status {status}: {body}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Deserialization(msg) => write!(f, "deserialization error: {msg}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::Storage(msg) => write!(f, "storage error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::TokenRefresh(cause) => Some(cause.as_ref()),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::Timeout
        } else if err.is_decode() {
            AppError::Deserialization(err.to_string())
        } else {
            AppError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}
