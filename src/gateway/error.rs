//! Error types for backend calls.

use thiserror::Error;

/// Errors that can occur while talking to the inventory backend.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Base URL rejected when building the client
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// Transport-level failure (DNS, refused connection, TLS, ...)
    #[error("Connection to '{url}' failed: {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded the configured timeout
    #[error("Request to '{url}' timed out")]
    Timeout { url: String },

    /// Backend answered with a non-success status
    #[error("Backend returned {status}: {message}")]
    Status { status: u16, message: String },

    /// Single-record lookup found nothing
    #[error("Record {id} not found")]
    NotFound { id: i64 },

    /// Response body did not match the record shape
    #[error("Failed to decode response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl GatewayError {
    /// Classify a transport error, separating timeouts from other failures.
    pub(crate) fn from_transport(url: &str, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            GatewayError::Timeout {
                url: url.to_string(),
            }
        } else {
            GatewayError::Connection {
                url: url.to_string(),
                source,
            }
        }
    }

    /// Short machine-readable tag, used in log fields.
    pub fn error_type(&self) -> &'static str {
        match self {
            GatewayError::InvalidBaseUrl { .. } => "invalid_base_url",
            GatewayError::Connection { .. } => "connection_error",
            GatewayError::Timeout { .. } => "timeout",
            GatewayError::Status { .. } => "status_error",
            GatewayError::NotFound { .. } => "not_found",
            GatewayError::Decode { .. } => "decode_error",
        }
    }
}
