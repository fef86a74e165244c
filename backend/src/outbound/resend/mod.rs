//! Resend contacts API adapter.
//!
//! Implements the [`crate::domain::ports::ContactRegistry`] port against
//! `POST /audiences/{audience_id}/contacts` and loads its credentials through
//! [`ResendSettings`].

mod config;
mod dto;
mod http_registry;

pub use config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, ResendSettings, ResendSetupError};
pub use http_registry::ResendContactRegistry;
