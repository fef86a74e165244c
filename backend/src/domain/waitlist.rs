//! Waitlist signup data model.
//!
//! A [`WaitlistSignup`] is the only way into the registration use-case: it
//! guarantees all three fields are present and non-blank and that the email
//! matches the shared address pattern. [`NewContact`] is what the registry
//! receives once an audience is known.

use std::fmt;

use waitlist_contract::is_valid_email;

/// Validation errors returned by [`WaitlistSignup::try_from_parts`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupValidationError {
    /// At least one of email, first name or last name is absent or blank.
    MissingFields,
    /// The email does not look like `local@domain.tld`.
    InvalidEmail,
}

impl fmt::Display for SignupValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFields => write!(f, "email, first name and last name are required"),
            Self::InvalidEmail => write!(f, "email address is not valid"),
        }
    }
}

impl std::error::Error for SignupValidationError {}

/// A signup that passed presence and format checks.
///
/// Names are stored trimmed. The email is stored as received because the
/// address pattern already rejects surrounding whitespace.
///
/// # Examples
/// ```
/// use waitlist::domain::{SignupValidationError, WaitlistSignup};
///
/// let signup = WaitlistSignup::try_from_parts(
///     Some("ada@example.com"),
///     Some(" Ada "),
///     Some("Lovelace"),
/// )
/// .unwrap();
/// assert_eq!(signup.first_name(), "Ada");
///
/// let err = WaitlistSignup::try_from_parts(Some("ada@example.com"), None, Some("L"));
/// assert_eq!(err.unwrap_err(), SignupValidationError::MissingFields);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitlistSignup {
    email: String,
    first_name: String,
    last_name: String,
}

impl WaitlistSignup {
    /// Validate raw request fields.
    ///
    /// Presence is checked before format, so a blank name paired with a
    /// malformed email reports [`SignupValidationError::MissingFields`].
    pub fn try_from_parts(
        email: Option<&str>,
        first_name: Option<&str>,
        last_name: Option<&str>,
    ) -> Result<Self, SignupValidationError> {
        let (Some(email), Some(first_name), Some(last_name)) = (
            present(email),
            present(first_name),
            present(last_name),
        ) else {
            return Err(SignupValidationError::MissingFields);
        };
        if !is_valid_email(email) {
            return Err(SignupValidationError::InvalidEmail);
        }
        Ok(Self {
            email: email.to_owned(),
            first_name: first_name.trim().to_owned(),
            last_name: last_name.trim().to_owned(),
        })
    }

    /// Contact email address.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Given name, trimmed.
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Family name, trimmed.
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Domain part of the email, used in logs instead of the full address.
    pub fn email_domain(&self) -> &str {
        self.email
            .rsplit_once('@')
            .map_or("", |(_, domain)| domain)
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Validation error for [`AudienceId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudienceIdValidationError {
    /// The identifier is empty or only whitespace.
    Blank,
}

impl fmt::Display for AudienceIdValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blank => write!(f, "audience id must not be blank"),
        }
    }
}

impl std::error::Error for AudienceIdValidationError {}

/// Identifier of the registry audience signups are added to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AudienceId(String);

impl AudienceId {
    /// Validate and construct an audience identifier. Surrounding whitespace
    /// is dropped.
    pub fn new(id: impl Into<String>) -> Result<Self, AudienceIdValidationError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(AudienceIdValidationError::Blank);
        }
        if trimmed.len() == id.len() {
            Ok(Self(id))
        } else {
            Ok(Self(trimmed.to_owned()))
        }
    }
}

impl AsRef<str> for AudienceId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for AudienceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Contact record handed to the registry.
///
/// New contacts are always subscribed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    audience_id: AudienceId,
    email: String,
    first_name: String,
    last_name: String,
}

impl NewContact {
    /// Build the registry record for `signup` in `audience_id`.
    pub fn new(signup: &WaitlistSignup, audience_id: AudienceId) -> Self {
        Self {
            audience_id,
            email: signup.email().to_owned(),
            first_name: signup.first_name().to_owned(),
            last_name: signup.last_name().to_owned(),
        }
    }

    pub fn audience_id(&self) -> &AudienceId {
        &self.audience_id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Always `false`: joining the waitlist opts the contact in.
    pub fn unsubscribed(&self) -> bool {
        false
    }
}
