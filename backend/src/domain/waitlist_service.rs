//! Waitlist signup service.
//!
//! Implements [`WaitlistCommand`] over a [`ContactRegistry`]. Checks run in a
//! fixed order: presence, email format, registry configuration, then exactly
//! one registry call. Nothing is retried.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use crate::domain::ports::{
    ContactRegistry, ContactRegistryError, JoinWaitlistRequest, WaitlistCommand, WaitlistOutcome,
};
use crate::domain::{AudienceId, NewContact, SignupValidationError, WaitlistSignup};

/// Registry failure text that marks a contact the registry already holds.
const DUPLICATE_MARKER: &str = "already exists";

/// A registry together with the audience signups are added to.
pub struct RegistryBinding<R> {
    registry: Arc<R>,
    audience_id: AudienceId,
}

impl<R> RegistryBinding<R> {
    /// Bind `registry` to `audience_id`.
    pub fn new(registry: Arc<R>, audience_id: AudienceId) -> Self {
        Self {
            registry,
            audience_id,
        }
    }

    /// Audience new contacts are created in.
    pub fn audience_id(&self) -> &AudienceId {
        &self.audience_id
    }
}

impl<R> Clone for RegistryBinding<R> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
            audience_id: self.audience_id.clone(),
        }
    }
}

/// Waitlist service implementing the driving port.
///
/// Without a binding every valid signup resolves to
/// [`WaitlistOutcome::NotConfigured`].
pub struct WaitlistService<R> {
    binding: Option<RegistryBinding<R>>,
}

impl<R> WaitlistService<R> {
    /// Create a service. Pass `None` when registry credentials are missing.
    pub fn new(binding: Option<RegistryBinding<R>>) -> Self {
        Self { binding }
    }

    /// Whether a registry is bound.
    pub fn is_configured(&self) -> bool {
        self.binding.is_some()
    }
}

impl<R> WaitlistService<R>
where
    R: ContactRegistry,
{
    fn validate(request: &JoinWaitlistRequest) -> Result<WaitlistSignup, WaitlistOutcome> {
        WaitlistSignup::try_from_parts(
            request.email.as_deref(),
            request.first_name.as_deref(),
            request.last_name.as_deref(),
        )
        .map_err(|err| match err {
            SignupValidationError::MissingFields => WaitlistOutcome::MissingFields,
            SignupValidationError::InvalidEmail => WaitlistOutcome::InvalidEmail,
        })
    }

    fn map_registry_error(signup: &WaitlistSignup, err: &ContactRegistryError) -> WaitlistOutcome {
        // The registry signals duplicates only through its message wording.
        if err.message().contains(DUPLICATE_MARKER) {
            info!(
                email_domain = signup.email_domain(),
                "signup already on the waitlist"
            );
            return WaitlistOutcome::AlreadyRegistered;
        }
        error!(error = %err, "contact registry failed to add signup");
        WaitlistOutcome::RegistrationFailed {
            reason: err.message().to_owned(),
        }
    }
}

#[async_trait]
impl<R> WaitlistCommand for WaitlistService<R>
where
    R: ContactRegistry,
{
    async fn join(&self, request: JoinWaitlistRequest) -> WaitlistOutcome {
        let signup = match Self::validate(&request) {
            Ok(signup) => signup,
            Err(outcome) => return outcome,
        };

        let Some(binding) = &self.binding else {
            error!("contact registry api key or audience id is not configured");
            return WaitlistOutcome::NotConfigured;
        };

        let contact = NewContact::new(&signup, binding.audience_id.clone());
        match binding.registry.create_contact(&contact).await {
            Ok(()) => {
                info!(email_domain = signup.email_domain(), "signup joined the waitlist");
                WaitlistOutcome::Joined
            }
            Err(err) => Self::map_registry_error(&signup, &err),
        }
    }
}
