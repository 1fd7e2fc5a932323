//! Error type for catalog service requests.

use std::fmt;

/// Failure modes of a catalog service request.
///
/// A successful request with an empty body is not an error; "not found" is
/// expressed by an empty result so callers can tell the two apart.
#[derive(Debug)]
pub enum FetchError {
    /// Connection, TLS or timeout failure before a response was read.
    Network(String),
    /// The service answered with a non-success status.
    Status {
        /// HTTP status code.
        code: u16,
        /// First characters of the response body, for diagnostics.
        preview: String,
    },
    /// The body could not be decoded as a list of countries.
    Decode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(msg) => write!(f, "network error: {msg}"),
            Self::Status { code, .. } => write!(f, "service returned status {code}"),
            Self::Decode(msg) => write!(f, "invalid response body: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        Self::Network(e.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}
