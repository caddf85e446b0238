//! Client for the backend's NLP classification service.
mod client;
mod error;
mod types;

pub use client::{NlpClient, NlpGateway};
pub use error::{NlpError, NlpErrorKind};
pub use types::NlpReply;
