//! Error types for the exaroton API client.
//!
//! This module provides the central [`Error`] enum using thiserror, covering
//! the three failure categories of the client: local argument validation,
//! transport failures and errors reported by the provider itself.

use thiserror::Error;

/// Main error type for exaroton API operations.
///
/// Every variant carries the endpoint it originated from, so callers can
/// diagnose a failure without inspecting transport internals.
#[derive(Error, Debug)]
pub enum Error {
    /// A required argument was missing or malformed.
    ///
    /// Raised before the request is built; no network call has been made.
    #[error("invalid argument for {endpoint}: {message}")]
    Validation {
        /// The operation that rejected the argument.
        endpoint: String,
        /// Description of the rejected argument.
        message: String,
    },

    /// The call never produced a decodable response envelope.
    ///
    /// Covers network failures, non-2xx responses without a decodable
    /// envelope and malformed JSON payloads.
    #[error("transport failure for {endpoint}: {message}")]
    Transport {
        /// The request path that failed.
        endpoint: String,
        /// Description of the failure.
        message: String,
        /// Underlying transport or decoding error, if any.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The provider answered with `success: false`.
    #[error("API error for {endpoint}: {message}")]
    Api {
        /// The request path the provider rejected.
        endpoint: String,
        /// The provider's error message, verbatim.
        message: String,
    },
}

impl Error {
    pub(crate) fn validation(endpoint: &str, message: impl Into<String>) -> Self {
        Error::Validation {
            endpoint: endpoint.to_owned(),
            message: message.into(),
        }
    }

    pub(crate) fn api(endpoint: &str, message: impl Into<String>) -> Self {
        Error::Api {
            endpoint: endpoint.to_owned(),
            message: message.into(),
        }
    }

    pub(crate) fn http(endpoint: &str, source: reqwest::Error) -> Self {
        Error::Transport {
            endpoint: endpoint.to_owned(),
            message: format!("request failed: {source}"),
            source: Some(Box::new(source)),
        }
    }

    pub(crate) fn malformed(endpoint: &str, source: serde_json::Error) -> Self {
        Error::Transport {
            endpoint: endpoint.to_owned(),
            message: format!("malformed JSON payload: {source}"),
            source: Some(Box::new(source)),
        }
    }

    pub(crate) fn status(endpoint: &str, status: reqwest::StatusCode) -> Self {
        Error::Transport {
            endpoint: endpoint.to_owned(),
            message: format!("HTTP {status} without a decodable envelope"),
            source: None,
        }
    }

    pub(crate) fn missing_data(endpoint: &str) -> Self {
        Error::Transport {
            endpoint: endpoint.to_owned(),
            message: "response envelope is missing its data payload".to_owned(),
            source: None,
        }
    }
}

/// Convenience type alias for Results using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
