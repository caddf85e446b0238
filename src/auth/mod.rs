//! Login exchange and the bearer credential it produces.
mod client;

pub use client::{AuthClient, AuthError, Credential, UserProfile};
