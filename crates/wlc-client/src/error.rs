//! Error types for the WLC client.

use thiserror::Error;
use wlc_core::{CoreError, ValidationError};

/// Failures below the protocol layer.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request could not be built (e.g. malformed URL). Nothing was sent.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("request timed out")]
    Timeout,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("failed to read response body: {0}")]
    Body(String),
}

impl TransportError {
    /// Whether the request may have reached the network.
    pub fn was_sent(&self) -> bool {
        !matches!(self, TransportError::InvalidRequest(_))
    }
}

/// Errors returned by [`WlcClient`](crate::WlcClient) operations.
///
/// A non-zero `errcode` from the service is not an error; it comes back
/// inside the decoded response.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Rejected locally before any network activity.
    #[error("invalid parameter: {0}")]
    InvalidParameter(#[from] ValidationError),

    #[error("crypto error: {0}")]
    Crypto(#[from] CoreError),

    #[error("failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The response body did not match the expected shape.
    #[error("failed to decode response (HTTP {status}): {source}")]
    Decode {
        status: u16,
        body: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// True for errors raised before a request was handed to the transport,
    /// and for transport errors where nothing was sent.
    pub fn is_local(&self) -> bool {
        match self {
            ClientError::InvalidParameter(_)
            | ClientError::Crypto(_)
            | ClientError::Encode(_)
            | ClientError::Config(_) => true,
            ClientError::Transport(e) => !e.was_sent(),
            ClientError::Decode { .. } => false,
        }
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_was_sent() {
        assert!(!TransportError::InvalidRequest("bad url".into()).was_sent());
        assert!(TransportError::Timeout.was_sent());
        assert!(TransportError::Connection("refused".into()).was_sent());
        assert!(TransportError::Body("eof".into()).was_sent());
    }

    #[test]
    fn test_is_local() {
        assert!(ClientError::from(ValidationError::EmptyCollections).is_local());
        assert!(ClientError::from(TransportError::InvalidRequest("x".into())).is_local());
        assert!(!ClientError::from(TransportError::Timeout).is_local());
    }

    #[test]
    fn test_decode_error_message_includes_status() {
        let source = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let err = ClientError::Decode {
            status: 502,
            body: "<html>".into(),
            source,
        };
        assert!(err.to_string().contains("HTTP 502"));
    }
}
