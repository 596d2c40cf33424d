/*
[INPUT]:  Error sources (argument checks, HTTP status, transport, serialization)
[OUTPUT]: Structured error type separating local misuse from remote failures
[POS]:    Error handling layer - unified error type for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use thiserror::Error;

/// Main error type for the PNP API wrapper
#[derive(Error, Debug)]
pub enum PnpError {
    /// Required argument combination was violated; no request was sent
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// API returned a non-2xx response
    #[error("{method} request to {url} failed with status code: {status}")]
    Api {
        method: Method,
        url: String,
        status: StatusCode,
        /// `error` field of the response body, when the server sent one
        message: Option<String>,
        headers: HeaderMap,
        /// Raw response body
        body: String,
    },

    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl PnpError {
    /// Check if the error was raised locally before any network call
    pub fn is_argument_error(&self) -> bool {
        matches!(self, PnpError::InvalidArgument(_))
    }

    /// HTTP status of the failed response, if the server answered
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            PnpError::Api { status, .. } => Some(*status),
            PnpError::Http(err) => err.status(),
            _ => None,
        }
    }

    /// Error message reported by the server in the response body
    pub fn server_message(&self) -> Option<&str> {
        match self {
            PnpError::Api { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Headers of the failed response, if the server answered
    pub fn response_headers(&self) -> Option<&HeaderMap> {
        match self {
            PnpError::Api { headers, .. } => Some(headers),
            _ => None,
        }
    }

    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        PnpError::InvalidArgument(message.into())
    }
}

/// Result type alias for PNP API operations
pub type Result<T> = std::result::Result<T, PnpError>;
