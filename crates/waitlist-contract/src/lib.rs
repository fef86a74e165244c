//! Wire contract shared by the waitlist signup form and the waitlist handler.
//!
//! Both sides of `POST /api/waitlist` depend on this crate so the request and
//! response shapes, the field names, and the email pattern cannot drift apart.
//! The client pre-check and the server check call the same
//! [`is_valid_email`], so a given string gets the same verdict on both sides.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Route served by the waitlist handler.
pub const WAITLIST_PATH: &str = "/api/waitlist";

/// Message returned with a successful signup.
pub const JOINED_MESSAGE: &str = "Successfully joined the waitlist! We'll be in touch soon.";

#[expect(
    clippy::expect_used,
    reason = "the pattern is a literal and is covered by unit tests"
)]
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

/// Check an email address against the signup pattern.
///
/// The address must be free of whitespace, contain exactly one `@`, and the
/// domain part must contain a `.` with text on both sides. No trimming is
/// applied: leading or trailing whitespace fails the check.
///
/// # Examples
/// ```
/// use waitlist_contract::is_valid_email;
///
/// assert!(is_valid_email("a@b.com"));
/// assert!(!is_valid_email("not-an-email"));
/// assert!(!is_valid_email("a@localhost"));
/// ```
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Form fields collected from a visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    /// Contact email address.
    Email,
    /// Given name.
    FirstName,
    /// Family name.
    LastName,
}

impl Field {
    /// Every field, in the order the form renders them.
    pub const ALL: [Self; 3] = [Self::FirstName, Self::LastName, Self::Email];

    /// JSON key used for the field on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request body for `POST /api/waitlist`.
///
/// Example JSON:
/// `{"email":"ada@example.com","firstName":"Ada","lastName":"Lovelace"}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionInput {
    /// Contact email address.
    pub email: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
}

impl SubmissionInput {
    /// Borrow the value of one field.
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
        }
    }

    /// Mutable access to one field.
    pub fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Email => &mut self.email,
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
        }
    }
}

/// Response body for `POST /api/waitlist`.
///
/// `error` is omitted from the JSON when absent.
///
/// # Examples
/// ```
/// use waitlist_contract::{SubmissionResult, JOINED_MESSAGE};
///
/// let body = serde_json::to_value(SubmissionResult::joined()).unwrap();
/// assert_eq!(body["success"], true);
/// assert_eq!(body["message"], JOINED_MESSAGE);
/// assert!(body.get("error").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResult {
    /// Whether the visitor was added to the waitlist.
    pub success: bool,
    /// Human readable outcome.
    pub message: String,
    /// Failure detail, present only when `success` is false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SubmissionResult {
    /// Successful signup carrying the fixed joined message.
    #[must_use]
    pub fn joined() -> Self {
        Self {
            success: true,
            message: JOINED_MESSAGE.to_owned(),
            error: None,
        }
    }

    /// Failed signup with a summary message and an error detail.
    #[must_use]
    pub fn failure(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for the shared email pattern and wire shapes.
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("a@b.com")]
    #[case("first.last+tag@mail.example.co.uk")]
    #[case("x@y.z")]
    fn accepts_well_formed_addresses(#[case] email: &str) {
        assert!(is_valid_email(email), "{email} should be accepted");
    }

    #[rstest]
    #[case::no_at("not-an-email")]
    #[case::no_dot_in_domain("a@localhost")]
    #[case::two_ats("a@b@c.com")]
    #[case::empty_local("@b.com")]
    #[case::empty_tld("a@b.")]
    #[case::dot_first("a@.com")]
    #[case::inner_space("a b@c.com")]
    #[case::leading_space(" a@b.com")]
    #[case::trailing_space("a@b.com ")]
    #[case::empty("")]
    fn rejects_malformed_addresses(#[case] email: &str) {
        assert!(!is_valid_email(email), "{email:?} should be rejected");
    }

    #[test]
    fn accepts_dot_inside_domain_before_last_label() {
        assert!(is_valid_email("a@b.c.d"));
    }

    #[test]
    fn submission_input_uses_camel_case_keys() {
        let input = SubmissionInput {
            email: "a@b.com".to_owned(),
            first_name: "A".to_owned(),
            last_name: "B".to_owned(),
        };
        let value = serde_json::to_value(&input).expect("serialise input");
        assert_eq!(
            value,
            json!({ "email": "a@b.com", "firstName": "A", "lastName": "B" })
        );
    }

    #[test]
    fn failure_result_carries_error_field() {
        let value = serde_json::to_value(SubmissionResult::failure(
            "Invalid email format",
            "Please provide a valid email address",
        ))
        .expect("serialise result");
        assert_eq!(
            value,
            json!({
                "success": false,
                "message": "Invalid email format",
                "error": "Please provide a valid email address",
            })
        );
    }

    #[test]
    fn result_without_error_key_decodes() {
        let result: SubmissionResult =
            serde_json::from_value(json!({ "success": true, "message": "ok" }))
                .expect("decode result");
        assert!(result.error.is_none());
    }

    #[rstest]
    #[case(Field::Email, "email")]
    #[case(Field::FirstName, "firstName")]
    #[case(Field::LastName, "lastName")]
    fn field_names_match_wire_keys(#[case] field: Field, #[case] expected: &str) {
        assert_eq!(field.as_str(), expected);
        assert_eq!(field.to_string(), expected);
    }
}
