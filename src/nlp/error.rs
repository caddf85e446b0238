//! Gateway error types
use thiserror::Error;

/// Error from a classify exchange, with classification.
///
/// `message` is the developer-facing detail that ends up in logs;
/// `server_message` is the human-readable string the backend put in the
/// response body, when there was one.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct NlpError {
    pub kind: NlpErrorKind,
    pub message: String,
    pub server_message: Option<String>,
}

impl NlpError {
    pub fn new(kind: NlpErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            server_message: None,
        }
    }

    pub fn with_server_message(mut self, message: impl Into<String>) -> Self {
        self.server_message = Some(message.into());
        self
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(NlpErrorKind::Unavailable, message)
    }

    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::new(NlpErrorKind::RateLimited, message)
    }

    pub fn server(message: impl Into<String>) -> Self {
        Self::new(NlpErrorKind::Server, message)
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(NlpErrorKind::Malformed, message)
    }

    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::new(NlpErrorKind::Unauthenticated, message)
    }

    /// The text shown to the user when this error ends a turn. The
    /// backend's own message wins when present; otherwise a canned
    /// string for the kind.
    pub fn user_message(&self) -> String {
        if let Some(message) = &self.server_message {
            return message.clone();
        }
        match self.kind {
            NlpErrorKind::Unavailable => {
                "Could not reach the assistant. Check your connection and try again."
            }
            NlpErrorKind::RateLimited => {
                "You're sending messages too quickly. Give it a moment and try again."
            }
            NlpErrorKind::Server => "The assistant ran into a problem. Please try again.",
            NlpErrorKind::Malformed => {
                "The assistant sent back something unexpected. Please try again."
            }
            NlpErrorKind::Unauthenticated => "Your session has expired. Please log in again.",
        }
        .to_string()
    }
}

/// Error classification surfaced to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NlpErrorKind {
    /// Could not reach the service: connect failure or timeout
    Unavailable,
    /// The service's rate limiter refused the request (429)
    RateLimited,
    /// The service answered with an error status
    Server,
    /// The body did not decode to a recognizable reply
    Malformed,
    /// The service rejected the credential (401, 403)
    Unauthenticated,
}
