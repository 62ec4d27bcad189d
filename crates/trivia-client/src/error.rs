//! Client error types.

use thiserror::Error;

/// Errors that can occur when talking to the trivia service.
#[derive(Debug, Error)]
pub enum TriviaError {
    /// HTTP transport error (unreachable host, timeout, aborted body).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success HTTP status.
    #[error("{message} (HTTP {status})")]
    Status {
        /// HTTP status code returned by the service.
        status: u16,
        /// Which resource was being fetched.
        message: String,
    },

    /// The body was not JSON of the expected shape, or a field did not decode.
    #[error("{0}")]
    Parse(String),

    /// The embedded `response_code` signalled a failure.
    #[error("{message}")]
    Api {
        /// Raw `response_code` value.
        code: i64,
        /// Human-readable message from the response-code table.
        message: String,
    },
}

/// Coarse failure category for callers that only need to branch on kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Parse,
    Api,
}

impl TriviaError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Http(_) | Self::Status { .. } => ErrorKind::Network,
            Self::Parse(_) => ErrorKind::Parse,
            Self::Api { .. } => ErrorKind::Api,
        }
    }

    /// Attribute a field-level parse failure to the response it came from.
    pub(crate) fn in_response(self, resource: &str) -> Self {
        match self {
            Self::Parse(detail) => {
                Self::Parse(format!("Failed to parse {resource} response: {detail}"))
            }
            other => other,
        }
    }
}
