//! Failures of a round-trip to the issues backend.

use thiserror::Error;

use crate::traits::HttpError;

/// Any failure of a remote round-trip: the request never completed, the
/// server answered with a non-2xx status, or the body could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("connection failed: {0}")]
    Connection(String),

    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("server returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("malformed response: {0}")]
    Decode(String),

    #[error("invalid request: {0}")]
    Request(String),
}

impl TransportError {
    /// The remote entity does not exist (HTTP 404).
    pub fn is_not_found(&self) -> bool {
        matches!(self, TransportError::Status { status: 404, .. })
    }

    /// Short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            TransportError::Connection(_) => "E_NET_CONN",
            TransportError::Timeout(_) => "E_NET_TIMEOUT",
            TransportError::Status { .. } => "E_NET_HTTP",
            TransportError::Decode(_) => "E_NET_INVALID",
            TransportError::Request(_) => "E_NET_REQUEST",
        }
    }

    /// Message suitable for a notification.
    pub fn user_message(&self) -> String {
        match self {
            TransportError::Connection(_) => {
                "Unable to reach the issue server.".to_string()
            }
            TransportError::Timeout(_) => "The issue server did not respond in time.".to_string(),
            TransportError::Status { status, .. } => match *status {
                400 => "The server rejected the request.".to_string(),
                404 => "The issue no longer exists on the server.".to_string(),
                500..=599 => "The issue server is experiencing problems.".to_string(),
                _ => format!("The issue server returned an error (HTTP {}).", status),
            },
            TransportError::Decode(_) => "Received an invalid response from the server.".to_string(),
            TransportError::Request(_) => "The request could not be sent.".to_string(),
        }
    }
}

impl From<HttpError> for TransportError {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::ConnectionFailed(msg) => TransportError::Connection(msg),
            HttpError::Timeout(msg) => TransportError::Timeout(msg),
            HttpError::InvalidUrl(msg) => TransportError::Request(msg),
            HttpError::Other(msg) => TransportError::Connection(msg),
        }
    }
}

impl From<serde_json::Error> for TransportError {
    fn from(err: serde_json::Error) -> Self {
        TransportError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_detection() {
        let not_found = TransportError::Status {
            status: 404,
            message: String::new(),
        };
        assert!(not_found.is_not_found());
        assert!(!TransportError::Timeout("10s".to_string()).is_not_found());
        assert!(!TransportError::Status {
            status: 500,
            message: String::new()
        }
        .is_not_found());
    }

    #[test]
    fn test_from_http_error() {
        assert_eq!(
            TransportError::from(HttpError::Timeout("t".to_string())),
            TransportError::Timeout("t".to_string())
        );
        assert_eq!(
            TransportError::from(HttpError::InvalidUrl("u".to_string())),
            TransportError::Request("u".to_string())
        );
    }

    #[test]
    fn test_from_json_error_is_decode() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(TransportError::from(err), TransportError::Decode(_)));
    }

    #[test]
    fn test_user_messages_are_not_empty() {
        let errors = [
            TransportError::Connection("x".to_string()),
            TransportError::Timeout("x".to_string()),
            TransportError::Status {
                status: 503,
                message: "x".to_string(),
            },
            TransportError::Decode("x".to_string()),
            TransportError::Request("x".to_string()),
        ];
        for err in errors {
            assert!(!err.user_message().is_empty());
            assert!(err.error_code().starts_with("E_NET_"));
        }
    }
}
