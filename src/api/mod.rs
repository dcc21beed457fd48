mod client;
mod config;
mod http_client;

pub use client::Client;
pub use config::{ClientConfig, ConfigError, DEFAULT_BASE_URL};

use crate::types::ApiError;

/// Possible failures while talking to the API.
///
/// Every variant records the client operation it came from, e.g. `Client::place_call`.
/// Nothing is retried internally; whether to retry is up to the caller.
#[derive(Debug, thiserror::Error)]
pub enum TwilioError {
    /// The request URL could not be parsed. The request was never sent.
    #[error("{operation}: invalid request URL {url:?}: {source}")]
    InvalidUrl {
        operation: &'static str,
        url: String,
        #[source]
        source: url::ParseError,
    },
    /// The request parameters could not be form-encoded. The request was never sent.
    #[error("{operation}: unable to encode request parameters: {source}")]
    Encode {
        operation: &'static str,
        #[source]
        source: serde_urlencoded::ser::Error,
    },
    /// The request could not be assembled. The request was never sent.
    #[error("{operation}: unable to build request: {source}")]
    Build {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },
    /// Sending the request or reading its response failed.
    #[error("{operation}: transport failure: {source}")]
    Transport {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },
    /// The API answered with an unexpected status and a structured error.
    #[error("{operation}: {source}")]
    Api {
        operation: &'static str,
        #[source]
        source: ApiError,
    },
    /// The API answered with an unexpected status, and its error body was unreadable.
    #[error("{operation}: unable to decode error response (HTTP {status}): {source}")]
    ErrorBody {
        operation: &'static str,
        status: u16,
        #[source]
        source: serde_json::Error,
    },
    /// The API reported success, but its response body was unreadable.
    #[error("{operation}: unable to decode response: {source}")]
    Decode {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl TwilioError {
    /// The client operation this error originated from.
    pub fn operation(&self) -> &'static str {
        match self {
            Self::InvalidUrl { operation, .. }
            | Self::Encode { operation, .. }
            | Self::Build { operation, .. }
            | Self::Transport { operation, .. }
            | Self::Api { operation, .. }
            | Self::ErrorBody { operation, .. }
            | Self::Decode { operation, .. } => *operation,
        }
    }

    /// The structured error returned by the API, if that is what this is.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api { source, .. } => Some(source),
            _ => None,
        }
    }

    /// Whether the request failed in transit. These are the only failures
    /// where the API may not have seen the request at all.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }
}
