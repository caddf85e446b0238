//! The conversation session: coordinates transcript, context, and the
//! request lifecycle around gateway calls.
use std::sync::Mutex;

use serde_json::Value;
use uuid::Uuid;

use super::context::{ConversationContext, LAST_INTENT_KEY};
use super::lifecycle::{RequestLifecycle, RequestStatus, SessionError, TurnTicket};
use super::transcript::{Message, Transcript};
use crate::auth::Credential;
use crate::nlp::{NlpError, NlpGateway, NlpReply};

/// Why a send call was dropped before reaching the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Utterance was empty after trimming
    EmptyInput,
    /// Another request is already in flight for this session
    InFlight,
}

/// Result of a single send call.
#[derive(Debug, Clone, PartialEq)]
pub enum SendOutcome {
    /// The assistant answered; the message is already on the transcript
    Replied(Message),
    /// The turn failed; a fallback entry is on the transcript and the
    /// error is recorded on the session
    Failed(SessionError),
    /// Dropped before dispatch, nothing changed
    Rejected(RejectReason),
    /// A reset happened while the request was in flight, so the
    /// response was discarded
    Superseded,
}

/// One conversation with the assistant.
///
/// Owns the transcript, the carried context, and the request state
/// machine. All methods take `&self`: state lives behind a mutex so a
/// single `Arc<ChatSession>` can serve the UI and tests concurrently.
/// The lock is never held across the network round-trip; the critical
/// sections are the pre-dispatch mutations and the settle.
pub struct ChatSession {
    id: Uuid,
    gateway: Box<dyn NlpGateway>,
    credential: Option<Credential>,
    state: Mutex<SessionState>,
}

#[derive(Default)]
struct SessionState {
    transcript: Transcript,
    context: ConversationContext,
    lifecycle: RequestLifecycle,
}

impl ChatSession {
    pub fn new(gateway: impl NlpGateway + 'static, credential: Option<Credential>) -> Self {
        Self {
            id: Uuid::new_v4(),
            gateway: Box::new(gateway),
            credential,
            state: Mutex::new(SessionState::default()),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Send one user utterance through the gateway and settle the
    /// result onto the session.
    ///
    /// An empty utterance (after trimming) and a send while another
    /// request is in flight are both dropped without touching any
    /// state. A gateway failure never escapes this call: it becomes a
    /// `Failed` outcome with the error recorded on the session and a
    /// fallback entry on the transcript.
    pub async fn send(&self, utterance: &str) -> SendOutcome {
        let text = utterance.trim();
        if text.is_empty() {
            return SendOutcome::Rejected(RejectReason::EmptyInput);
        }

        // Admission plus the pre-dispatch mutations are one critical
        // section: the user message is on the transcript before the
        // request goes out, so transcript order reflects send order.
        let (ticket, snapshot) = {
            let mut state = self.state.lock().unwrap();
            let Some(ticket) = state.lifecycle.begin() else {
                tracing::debug!("session {} rejected send: request in flight", self.id);
                return SendOutcome::Rejected(RejectReason::InFlight);
            };
            state.transcript.push(Message::user(text));
            (ticket, state.context.clone())
        };

        tracing::debug!("session {} dispatching classify request", self.id);
        let result = self
            .gateway
            .classify(text, &snapshot, self.credential.as_ref())
            .await;

        self.settle(ticket, result)
    }

    /// The single transition point for a finished round-trip. Applies
    /// the success or failure to the session, unless a reset made the
    /// response stale.
    fn settle(&self, ticket: TurnTicket, result: Result<NlpReply, NlpError>) -> SendOutcome {
        let mut state = self.state.lock().unwrap();
        if !state.lifecycle.is_current(ticket) {
            tracing::debug!("session {} discarding response settled after reset", self.id);
            return SendOutcome::Superseded;
        }

        match result {
            Ok(reply) => {
                if let Some(delta) = &reply.context {
                    state.context.merge(delta);
                }
                if let Some(intent) = &reply.intent {
                    state.context.set(LAST_INTENT_KEY, Value::String(intent.clone()));
                }
                let message = Message::assistant(&reply.response, reply.intent.clone());
                state.transcript.push(message.clone());
                state.lifecycle.complete();
                SendOutcome::Replied(message)
            }
            Err(err) => {
                tracing::warn!("session {} turn failed: {}", self.id, err);
                let error = SessionError {
                    message: err.user_message(),
                    kind: err.kind,
                };
                // The transcript always reflects what the user saw,
                // including failures.
                state.transcript.push(Message::assistant(&error.message, None));
                state.lifecycle.fail(error.clone());
                SendOutcome::Failed(error)
            }
        }
    }

    /// Wipe the conversation: transcript, context, error, status. Safe
    /// to call at any time; a response still in flight is discarded
    /// when it lands. Idempotent.
    pub fn reset(&self) {
        let mut state = self.state.lock().unwrap();
        state.transcript.clear();
        state.context.clear();
        state.lifecycle.reset();
        tracing::debug!("session {} reset", self.id);
    }

    pub fn transcript(&self) -> Vec<Message> {
        self.state.lock().unwrap().transcript.messages()
    }

    pub fn status(&self) -> RequestStatus {
        self.state.lock().unwrap().lifecycle.status()
    }

    pub fn last_error(&self) -> Option<SessionError> {
        self.state.lock().unwrap().lifecycle.error().cloned()
    }

    pub fn context(&self) -> ConversationContext {
        self.state.lock().unwrap().context.clone()
    }
}
