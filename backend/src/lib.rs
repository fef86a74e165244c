//! Waitlist signup backend.
//!
//! Serves `POST /api/waitlist`, validating each signup and registering it
//! with the Resend contacts API. Layout follows ports and adapters:
//! `domain` holds the rules, `inbound::http` the Actix surface, and
//! `outbound::resend` the registry client.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
