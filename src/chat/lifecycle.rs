//! Request state machine for a conversation session.
use serde::Serialize;

use crate::nlp::NlpErrorKind;

/// Where the session's send operation currently stands. Exactly one
/// value at a time; `Failed` is not terminal, the next send or a reset
/// clears it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Failed,
}

/// Error recorded on the session after a failed turn. Cleared when the
/// next send is admitted and on reset.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionError {
    /// What the user was shown (also appended to the transcript)
    pub message: String,
    /// Which failure kind produced it
    pub kind: NlpErrorKind,
}

/// Proof that a turn was admitted, carrying the session generation at
/// dispatch time. A response may only settle if the generation still
/// matches, which is how a reset invalidates in-flight requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnTicket {
    generation: u64,
}

/// Single-flight admission and settle bookkeeping for one session.
#[derive(Debug, Default)]
pub struct RequestLifecycle {
    status: RequestStatus,
    error: Option<SessionError>,
    generation: u64,
}

impl RequestLifecycle {
    pub fn status(&self) -> RequestStatus {
        self.status
    }

    pub fn error(&self) -> Option<&SessionError> {
        self.error.as_ref()
    }

    /// Admit a new turn. Returns `None` while another request is in
    /// flight; otherwise moves to `Loading` and clears any previous
    /// error.
    pub fn begin(&mut self) -> Option<TurnTicket> {
        if self.status == RequestStatus::Loading {
            return None;
        }
        self.status = RequestStatus::Loading;
        self.error = None;
        Some(TurnTicket {
            generation: self.generation,
        })
    }

    /// Whether a response for `ticket` may still be applied. False once
    /// the session was reset after the ticket was issued.
    pub fn is_current(&self, ticket: TurnTicket) -> bool {
        self.generation == ticket.generation
    }

    pub fn complete(&mut self) {
        self.status = RequestStatus::Idle;
    }

    pub fn fail(&mut self, error: SessionError) {
        self.status = RequestStatus::Failed;
        self.error = Some(error);
    }

    /// Return to a clean idle state and invalidate every ticket issued
    /// so far.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.status = RequestStatus::Idle;
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some_error() -> SessionError {
        SessionError {
            message: "The assistant ran into a problem. Please try again.".to_string(),
            kind: NlpErrorKind::Server,
        }
    }

    #[test]
    fn test_starts_idle() {
        let lifecycle = RequestLifecycle::default();
        assert_eq!(lifecycle.status(), RequestStatus::Idle);
        assert!(lifecycle.error().is_none());
    }

    #[test]
    fn test_begin_moves_to_loading() {
        let mut lifecycle = RequestLifecycle::default();
        let ticket = lifecycle.begin();
        assert!(ticket.is_some());
        assert_eq!(lifecycle.status(), RequestStatus::Loading);
    }

    #[test]
    fn test_begin_rejected_while_loading() {
        let mut lifecycle = RequestLifecycle::default();
        lifecycle.begin().unwrap();
        assert!(lifecycle.begin().is_none());
    }

    #[test]
    fn test_complete_returns_to_idle() {
        let mut lifecycle = RequestLifecycle::default();
        let ticket = lifecycle.begin().unwrap();
        assert!(lifecycle.is_current(ticket));
        lifecycle.complete();
        assert_eq!(lifecycle.status(), RequestStatus::Idle);
    }

    #[test]
    fn test_fail_records_error() {
        let mut lifecycle = RequestLifecycle::default();
        lifecycle.begin().unwrap();
        lifecycle.fail(some_error());
        assert_eq!(lifecycle.status(), RequestStatus::Failed);
        assert_eq!(lifecycle.error().unwrap().kind, NlpErrorKind::Server);
    }

    #[test]
    fn test_begin_after_failure_clears_error() {
        let mut lifecycle = RequestLifecycle::default();
        lifecycle.begin().unwrap();
        lifecycle.fail(some_error());

        // Failed is not terminal
        let ticket = lifecycle.begin();
        assert!(ticket.is_some());
        assert_eq!(lifecycle.status(), RequestStatus::Loading);
        assert!(lifecycle.error().is_none());
    }

    #[test]
    fn test_reset_invalidates_outstanding_ticket() {
        let mut lifecycle = RequestLifecycle::default();
        let ticket = lifecycle.begin().unwrap();
        lifecycle.reset();

        assert!(!lifecycle.is_current(ticket));
        assert_eq!(lifecycle.status(), RequestStatus::Idle);
    }

    #[test]
    fn test_ticket_issued_after_reset_is_current() {
        let mut lifecycle = RequestLifecycle::default();
        let stale = lifecycle.begin().unwrap();
        lifecycle.reset();

        let fresh = lifecycle.begin().unwrap();
        assert!(!lifecycle.is_current(stale));
        assert!(lifecycle.is_current(fresh));
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut lifecycle = RequestLifecycle::default();
        lifecycle.begin().unwrap();
        lifecycle.fail(some_error());

        lifecycle.reset();
        lifecycle.reset();

        assert_eq!(lifecycle.status(), RequestStatus::Idle);
        assert!(lifecycle.error().is_none());
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&RequestStatus::Loading).unwrap(),
            r#""loading""#
        );
        assert_eq!(
            serde_json::to_string(&RequestStatus::Idle).unwrap(),
            r#""idle""#
        );
        assert_eq!(
            serde_json::to_string(&RequestStatus::Failed).unwrap(),
            r#""failed""#
        );
    }
}
