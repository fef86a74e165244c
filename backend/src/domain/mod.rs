//! Domain primitives, ports and services for the waitlist.
//!
//! Purpose: validate signups and register them with the contact registry
//! without knowing about HTTP or the registry's wire format. Inbound adapters
//! call the [`ports::WaitlistCommand`] driving port; outbound adapters
//! implement the [`ports::ContactRegistry`] driven port.
//!
//! Public surface:
//! - Error / ErrorCode: generic failure envelope for non-waitlist routes.
//! - TraceId: request-scoped correlation identifier.
//! - WaitlistSignup, NewContact, AudienceId: validated signup data.
//! - WaitlistService, RegistryBinding: the signup use-case.

pub mod error;
pub mod ports;
pub mod trace_id;
pub mod waitlist;
pub mod waitlist_service;

pub use self::error::{Error, ErrorCode, TRACE_ID_HEADER};
pub use self::trace_id::TraceId;
pub use self::waitlist::{
    AudienceId, AudienceIdValidationError, NewContact, SignupValidationError, WaitlistSignup,
};
pub use self::waitlist_service::{RegistryBinding, WaitlistService};

/// Convenient result alias for handlers returning the generic envelope.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use waitlist::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("nothing here"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
