//! Wire shapes for the Resend contacts endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::NewContact;

/// Body of `POST /audiences/{audience_id}/contacts`.
#[derive(Debug, Serialize)]
pub(super) struct CreateContactDto<'a> {
    pub(super) email: &'a str,
    pub(super) first_name: &'a str,
    pub(super) last_name: &'a str,
    pub(super) unsubscribed: bool,
}

impl<'a> From<&'a NewContact> for CreateContactDto<'a> {
    fn from(contact: &'a NewContact) -> Self {
        Self {
            email: contact.email(),
            first_name: contact.first_name(),
            last_name: contact.last_name(),
            unsubscribed: contact.unsubscribed(),
        }
    }
}

/// Error body returned by Resend on non-2xx responses.
#[derive(Debug, Deserialize)]
pub(super) struct ResendErrorDto {
    #[serde(default)]
    pub(super) message: Option<String>,
    #[serde(default)]
    pub(super) name: Option<String>,
    #[serde(default, rename = "statusCode")]
    pub(super) status_code: Option<u16>,
}
