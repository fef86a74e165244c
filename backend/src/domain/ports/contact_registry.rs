//! Driven port for the external contact registry.
//!
//! Adapters translate [`NewContact`] into the registry's wire format and
//! report failures as [`ContactRegistryError`]. The error message is the
//! registry's own wording; the service inspects it to spot duplicates.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::NewContact;

define_port_error! {
    /// Errors surfaced by contact registry adapters.
    pub enum ContactRegistryError {
        /// The registry answered and refused the contact.
        Rejected { message: String } => "contact registry rejected the contact: {message}",
        /// The registry could not be reached or its reply was unreadable.
        Transport { message: String } => "contact registry unavailable: {message}",
    }
}

impl ContactRegistryError {
    /// Registry-provided (or transport-level) failure text, without the
    /// variant prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Rejected { message } | Self::Transport { message } => message,
        }
    }
}

/// Adds contacts to an audience in the external registry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactRegistry: Send + Sync {
    /// Create `contact` in its audience.
    async fn create_contact(&self, contact: &NewContact) -> Result<(), ContactRegistryError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ContactRegistryError::rejected("Contact already exists"), "Contact already exists")]
    #[case(ContactRegistryError::transport("connection reset"), "connection reset")]
    fn message_strips_variant_prefix(#[case] err: ContactRegistryError, #[case] expected: &str) {
        assert_eq!(err.message(), expected);
    }

    #[rstest]
    fn display_names_the_failure_kind() {
        let err = ContactRegistryError::transport("timed out");
        assert_eq!(err.to_string(), "contact registry unavailable: timed out");
    }
}
