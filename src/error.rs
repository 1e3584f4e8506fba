//! Failure taxonomy for the equity service boundary.
//!
//! Everything here is recoverable: a failed request leaves the session in
//! `Failed` and the user may simply submit again. The `Display` text is what
//! gets surfaced, so `Service` carries the service-provided message verbatim
//! while the other variants prefix a category description.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EquityError {
    /// The request could not be sent or no response was received.
    #[error("request failed: {0}")]
    Transport(String),

    /// The service answered with a non-success status and (possibly) a
    /// structured error message.
    #[error("{0}")]
    Service(String),

    /// The response body was not valid JSON or lacked the expected shape.
    #[error("malformed equity response: {0}")]
    Parse(String),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_message_surfaces_verbatim() {
        let err = EquityError::Service("invalid hand".to_string());
        assert_eq!(err.to_string(), "invalid hand");
    }

    #[test]
    fn test_transport_message_describes_category() {
        let err = EquityError::Transport("connection refused".to_string());
        assert_eq!(err.to_string(), "request failed: connection refused");
    }

    #[test]
    fn test_parse_message_describes_category() {
        let err = EquityError::Parse("expected 2 equities, got 1".to_string());
        assert_eq!(
            err.to_string(),
            "malformed equity response: expected 2 equities, got 1"
        );
    }
}
