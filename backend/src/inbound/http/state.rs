//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and only see domain ports, so
//! they stay testable without network access.

use std::sync::Arc;

use crate::domain::ports::WaitlistCommand;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub waitlist: Arc<dyn WaitlistCommand>,
}

impl HttpState {
    /// Bundle the waitlist use-case for handlers.
    pub fn new(waitlist: Arc<dyn WaitlistCommand>) -> Self {
        Self { waitlist }
    }
}
