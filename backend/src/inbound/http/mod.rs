//! HTTP inbound adapter.
//!
//! [`configure`] registers every route this adapter serves so the server
//! binary and the integration tests assemble the same application.

pub mod error;
pub mod fallback;
pub mod health;
pub mod schemas;
pub mod state;
pub mod waitlist;

use actix_web::web;

/// Register the `/api` scope and the health probes on `cfg`.
///
/// Callers supply [`state::HttpState`] and [`health::HealthState`] as app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(waitlist::waitlist_scope())
        .service(health::ready)
        .service(health::live);
}
