//! Waitlist signup form controller.
//!
//! The controller collects first name, last name and email, validates them
//! locally, submits them to `POST /api/waitlist` through a
//! [`WaitlistTransport`], and turns the reply into a display status.
//!
//! Public surface:
//! - [`SignupForm`]: field state, validation messages and submit status.
//! - [`validate_submission`]: the local pre-check shared with the form.
//! - [`WaitlistTransport`]: seam for the network call; [`HttpWaitlistTransport`]
//!   is the reqwest implementation.

mod form;
mod http;
mod transport;
mod validation;

pub use form::{
    FAILED_FALLBACK, FormRejection, JOINED_FALLBACK, NETWORK_FAILURE, SignupForm, SubmitStatus,
};
pub use http::{HttpTransportSetupError, HttpWaitlistTransport};
pub use transport::{TransportError, TransportResponse, WaitlistTransport};
pub use validation::{
    EMAIL_INVALID, EMAIL_REQUIRED, FIRST_NAME_REQUIRED, LAST_NAME_REQUIRED, ValidationErrors,
    validate_submission,
};
