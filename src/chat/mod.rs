//! Conversation state: the transcript, the context carried between
//! turns, the request lifecycle, and the session that coordinates them.
mod context;
mod lifecycle;
mod session;
mod transcript;

pub use context::{ConversationContext, LAST_INTENT_KEY};
pub use lifecycle::{RequestStatus, SessionError};
pub use session::{ChatSession, RejectReason, SendOutcome};
pub use transcript::{Message, Transcript};
