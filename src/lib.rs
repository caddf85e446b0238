//! Conversation core for an SAP-backed natural-language assistant.
//!
//! The [`chat::ChatSession`] owns one conversation: its transcript, the
//! context carried between turns, and the request state machine around
//! calls to the backend's classify endpoint. The [`nlp`] module holds
//! the HTTP gateway, [`auth`] the login exchange, and [`cli`] a small
//! terminal client over the same session API a UI would consume.
pub mod auth;
pub mod chat;
pub mod cli;
pub mod core;
pub mod nlp;
