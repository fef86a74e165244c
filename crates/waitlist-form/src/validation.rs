//! Local pre-submission validation for the signup form.

use std::collections::BTreeMap;

use waitlist_contract::{Field, SubmissionInput, is_valid_email};

/// Message shown when the first name is blank.
pub const FIRST_NAME_REQUIRED: &str = "First name is required";
/// Message shown when the last name is blank.
pub const LAST_NAME_REQUIRED: &str = "Last name is required";
/// Message shown when the email is blank.
pub const EMAIL_REQUIRED: &str = "Email is required";
/// Message shown when the email fails the shared pattern.
pub const EMAIL_INVALID: &str = "Please enter a valid email";

/// Per-field validation messages.
///
/// At most one message is held per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    /// Message recorded for `field`, if any.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Whether any field carries a message.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields carrying a message.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over `(field, message)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    pub(crate) fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub(crate) fn clear_field(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub(crate) fn clear(&mut self) {
        self.0.clear();
    }
}

/// Check every field of `input`, collecting all failures rather than stopping
/// at the first one.
///
/// Blank checks trim the value; the email pattern is tested against the raw
/// value, so surrounding whitespace makes an address invalid.
///
/// # Examples
/// ```
/// use waitlist_contract::{Field, SubmissionInput};
/// use waitlist_form::validate_submission;
///
/// let errors = validate_submission(&SubmissionInput::default());
/// assert_eq!(errors.len(), 3);
/// assert_eq!(errors.get(Field::Email), Some("Email is required"));
/// ```
#[must_use]
pub fn validate_submission(input: &SubmissionInput) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if input.first_name.trim().is_empty() {
        errors.insert(Field::FirstName, FIRST_NAME_REQUIRED);
    }

    if input.last_name.trim().is_empty() {
        errors.insert(Field::LastName, LAST_NAME_REQUIRED);
    }

    if input.email.trim().is_empty() {
        errors.insert(Field::Email, EMAIL_REQUIRED);
    } else if !is_valid_email(&input.email) {
        errors.insert(Field::Email, EMAIL_INVALID);
    }

    errors
}
