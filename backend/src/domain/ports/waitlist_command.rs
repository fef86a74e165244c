//! Driving port for joining the waitlist.
//!
//! Inbound adapters hand over the raw, possibly incomplete fields and get a
//! [`WaitlistOutcome`] back. Every outcome, including failures, is an
//! ordinary value: the adapter decides how each one is rendered.

use async_trait::async_trait;

/// Raw signup fields as received from a client.
///
/// Fields are optional because clients may omit them; validation happens
/// behind the port.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JoinWaitlistRequest {
    /// Contact email address.
    pub email: Option<String>,
    /// Given name.
    pub first_name: Option<String>,
    /// Family name.
    pub last_name: Option<String>,
}

/// Result of a join attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WaitlistOutcome {
    /// The registry accepted the contact.
    Joined,
    /// A required field was absent or blank.
    MissingFields,
    /// The email failed the address pattern.
    InvalidEmail,
    /// Registry credentials or audience are not configured.
    NotConfigured,
    /// The registry already holds this contact.
    AlreadyRegistered,
    /// The registry refused the contact or could not be reached.
    RegistrationFailed {
        /// Failure text reported by the registry adapter.
        reason: String,
    },
}

/// Domain use-case port for adding a signup to the waitlist.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WaitlistCommand: Send + Sync {
    /// Validate `request` and register it with the contact registry.
    async fn join(&self, request: JoinWaitlistRequest) -> WaitlistOutcome;
}
