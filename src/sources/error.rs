//! Error type shared by every fetch in the sources layer.

use std::fmt;

/// Failure of a single HTTP fetch or of decoding its body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchError {
    /// Network-level failure (connect, timeout, broken body).
    Transport(String),
    /// The server answered with a non-success status.
    Status {
        /// HTTP status code.
        status: u16,
        /// URL that was requested.
        url: String,
        /// Response body, when it could be read.
        body: Option<String>,
    },
    /// The body is not valid JSON.
    Decode(String),
    /// The JSON does not have the expected envelope or field shape.
    MalformedResponse(String),
    /// The request could not be built from the given inputs.
    InvalidRequest(String),
}

impl FetchError {
    /// Status code when this is an HTTP status error.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Shorthand for a malformed response error.
    pub fn malformed<S: Into<String>>(msg: S) -> Self {
        Self::MalformedResponse(msg.into())
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(msg) => write!(f, "request failed: {msg}"),
            Self::Status { status, url, .. } => write!(f, "HTTP {status} for URL: {url}"),
            Self::Decode(msg) => write!(f, "invalid JSON body: {msg}"),
            Self::MalformedResponse(msg) => write!(f, "malformed response: {msg}"),
            Self::InvalidRequest(msg) => write!(f, "invalid request: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            Self::Decode(error.to_string())
        } else {
            Self::Transport(error.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(error: serde_json::Error) -> Self {
        Self::Decode(error.to_string())
    }
}

/// Result alias for fetch operations.
pub type FetchResult<T> = Result<T, FetchError>;
