//! Shared harness for waitlist integration tests.
//!
//! [`InMemoryRegistry`] stands in for Resend: it remembers created contacts
//! and reports duplicates with Resend's wording.

use std::sync::{Arc, Mutex};

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use async_trait::async_trait;
use waitlist::Trace;
use waitlist::domain::ports::{ContactRegistry, ContactRegistryError};
use waitlist::domain::{AudienceId, NewContact, RegistryBinding, WaitlistService};
use waitlist::inbound::http::configure;
use waitlist::inbound::http::fallback::not_found;
use waitlist::inbound::http::health::HealthState;
use waitlist::inbound::http::state::HttpState;

pub const AUDIENCE_ID: &str = "aud_integration";
pub const DUPLICATE_WORDING: &str = "Contact already exists";

/// Registry double keeping contacts in memory.
#[derive(Default)]
pub struct InMemoryRegistry {
    contacts: Mutex<Vec<NewContact>>,
    failure: Mutex<Option<ContactRegistryError>>,
    calls: Mutex<usize>,
}

impl InMemoryRegistry {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Fail every following call with `error`.
    pub fn fail_with(&self, error: ContactRegistryError) {
        *self.failure.lock().expect("failure lock") = Some(error);
    }

    pub fn contacts(&self) -> Vec<NewContact> {
        self.contacts.lock().expect("contacts lock").clone()
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().expect("calls lock")
    }
}

#[async_trait]
impl ContactRegistry for InMemoryRegistry {
    async fn create_contact(&self, contact: &NewContact) -> Result<(), ContactRegistryError> {
        *self.calls.lock().expect("calls lock") += 1;
        if let Some(error) = self.failure.lock().expect("failure lock").clone() {
            return Err(error);
        }
        let mut contacts = self.contacts.lock().expect("contacts lock");
        if contacts.iter().any(|c| c.email() == contact.email()) {
            return Err(ContactRegistryError::rejected(DUPLICATE_WORDING));
        }
        contacts.push(contact.clone());
        Ok(())
    }
}

/// Handler state backed by `registry`, or unconfigured when `None`.
pub fn http_state(registry: Option<Arc<InMemoryRegistry>>) -> HttpState {
    let binding = registry.map(|registry| {
        RegistryBinding::new(registry, AudienceId::new(AUDIENCE_ID).expect("audience id"))
    });
    HttpState::new(Arc::new(WaitlistService::new(binding)))
}

/// The application as the server assembles it, minus Swagger and metrics.
pub fn waitlist_app(
    http_state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(HealthState::new()))
        .app_data(web::Data::new(http_state))
        .wrap(Trace)
        .configure(configure)
        .default_service(web::to(not_found))
}
