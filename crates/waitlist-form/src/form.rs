//! Signup form controller.
//!
//! [`SignupForm`] owns the three field values, their validation messages and
//! the status of the current submission attempt. It is renderer agnostic: a
//! page, a terminal UI, or the `join-waitlist` CLI feeds it edits and reads
//! back what to display.
//!
//! ```text
//! Idle ──submit──▶ Submitting ──2xx + success──▶ Success
//!   ▲                  │
//!   │                  └──anything else──▶ Error
//!   └─ Success / Error ──submit──▶ Submitting
//! ```
//!
//! Only one attempt may be in flight. While `Submitting`, further submits and
//! field edits are rejected with [`FormRejection::Busy`].

use tracing::{debug, warn};
use waitlist_contract::{Field, SubmissionInput};

use crate::transport::{TransportError, TransportResponse, WaitlistTransport};
use crate::validation::{ValidationErrors, validate_submission};

/// Display message used when a successful reply carries no message.
pub const JOINED_FALLBACK: &str = "Successfully joined the waitlist!";
/// Display message used when a failed reply carries neither error nor message.
pub const FAILED_FALLBACK: &str = "Something went wrong. Please try again.";
/// Display message used when the request could not complete.
pub const NETWORK_FAILURE: &str = "Network error. Please check your connection and try again.";

const SUBMIT_LABEL: &str = "[Join the Waitlist]";
const SUBMITTING_LABEL: &str = "[Joining...]";

/// Status of the latest submission attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    /// No attempt has completed yet.
    #[default]
    Idle,
    /// An attempt is in flight.
    Submitting,
    /// The latest attempt joined the waitlist.
    Success,
    /// The latest attempt failed.
    Error,
}

/// Reasons a submit or edit was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormRejection {
    /// Local validation failed; nothing was sent.
    #[error("form has {} invalid field(s)", .0.len())]
    Invalid(ValidationErrors),
    /// An attempt is already in flight.
    #[error("a submission is already in progress")]
    Busy,
}

/// Controller for the waitlist signup form.
///
/// # Examples
/// ```
/// use waitlist_contract::Field;
/// use waitlist_form::{FormRejection, SignupForm};
///
/// let mut form = SignupForm::new();
/// form.set_field(Field::Email, "not-an-email").unwrap();
/// let Err(FormRejection::Invalid(errors)) = form.begin_submission() else {
///     panic!("blank names must block submission");
/// };
/// assert_eq!(errors.get(Field::Email), Some("Please enter a valid email"));
/// assert_eq!(errors.get(Field::FirstName), Some("First name is required"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    values: SubmissionInput,
    errors: ValidationErrors,
    status: SubmitStatus,
    message: String,
}

impl SignupForm {
    /// Empty form in the `Idle` state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of `field`.
    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    /// Snapshot of all field values.
    #[must_use]
    pub const fn values(&self) -> &SubmissionInput {
        &self.values
    }

    /// Current validation messages.
    #[must_use]
    pub const fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Validation message for `field`, if any.
    #[must_use]
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    /// Status of the latest attempt.
    #[must_use]
    pub const fn status(&self) -> SubmitStatus {
        self.status
    }

    /// Message to display for the latest attempt. Empty while idle or in flight.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether an attempt is in flight; renderers disable inputs and the submit
    /// control while this is true.
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    /// Label for the submit control.
    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    /// Replace the value of `field` and drop that field's validation message.
    ///
    /// Other fields' messages are left untouched and validation is not re-run.
    ///
    /// # Errors
    ///
    /// Returns [`FormRejection::Busy`] while an attempt is in flight.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> Result<(), FormRejection> {
        if self.is_submitting() {
            return Err(FormRejection::Busy);
        }
        *self.values.get_mut(field) = value.into();
        self.errors.clear_field(field);
        Ok(())
    }

    /// Validate every field, store the resulting messages and return them.
    pub fn validate(&mut self) -> &ValidationErrors {
        self.errors = validate_submission(&self.values);
        &self.errors
    }

    /// Start an attempt: validate, then move to `Submitting` and hand back the
    /// payload to send.
    ///
    /// # Errors
    ///
    /// Returns [`FormRejection::Busy`] if an attempt is already in flight, or
    /// [`FormRejection::Invalid`] with every field message when validation
    /// fails. In both cases the status is unchanged.
    pub fn begin_submission(&mut self) -> Result<SubmissionInput, FormRejection> {
        if self.is_submitting() {
            return Err(FormRejection::Busy);
        }
        if !self.validate().is_empty() {
            return Err(FormRejection::Invalid(self.errors.clone()));
        }

        self.status = SubmitStatus::Submitting;
        self.message.clear();
        Ok(self.values.clone())
    }

    /// Finish the in-flight attempt with the transport outcome.
    ///
    /// A completion arriving when no attempt is in flight is ignored.
    pub fn complete_submission(&mut self, outcome: Result<TransportResponse, TransportError>) {
        if !self.is_submitting() {
            warn!(status = ?self.status, "ignoring completion without an attempt in flight");
            return;
        }

        match outcome {
            Ok(response) if response.is_success_status() && response.body.success => {
                self.status = SubmitStatus::Success;
                self.message = non_blank(response.body.message)
                    .unwrap_or_else(|| JOINED_FALLBACK.to_owned());
                self.values = SubmissionInput::default();
                self.errors.clear();
            }
            Ok(response) => {
                debug!(status = response.status, "waitlist signup rejected");
                let body = response.body;
                self.status = SubmitStatus::Error;
                self.message = body
                    .error
                    .and_then(non_blank)
                    .or_else(|| non_blank(body.message))
                    .unwrap_or_else(|| FAILED_FALLBACK.to_owned());
            }
            Err(error) => {
                warn!(%error, "waitlist submission did not complete");
                self.status = SubmitStatus::Error;
                NETWORK_FAILURE.clone_into(&mut self.message);
            }
        }
    }

    /// Run one full attempt through `transport`.
    ///
    /// # Errors
    ///
    /// Returns the [`FormRejection`] from [`Self::begin_submission`] when the
    /// attempt cannot start. Transport failures are not errors here; they end
    /// the attempt in [`SubmitStatus::Error`].
    pub async fn submit<T>(&mut self, transport: &T) -> Result<SubmitStatus, FormRejection>
    where
        T: WaitlistTransport + ?Sized,
    {
        let input = self.begin_submission()?;
        let outcome = transport.post_submission(&input).await;
        self.complete_submission(outcome);
        Ok(self.status)
    }
}

fn non_blank(text: String) -> Option<String> {
    if text.trim().is_empty() { None } else { Some(text) }
}
