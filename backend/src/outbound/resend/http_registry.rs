//! Reqwest-backed Resend contact registry.
//!
//! Transport details only: endpoint construction, bearer authentication,
//! timeout, and mapping Resend error bodies onto [`ContactRegistryError`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::debug;
use zeroize::Zeroizing;

use super::dto::{CreateContactDto, ResendErrorDto};
use crate::domain::NewContact;
use crate::domain::ports::{ContactRegistry, ContactRegistryError};

/// Contact registry adapter for the Resend contacts API.
pub struct ResendContactRegistry {
    client: Client,
    base_url: Url,
    api_key: Zeroizing<String>,
}

impl ResendContactRegistry {
    /// Build an adapter with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(
        base_url: Url,
        api_key: Zeroizing<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url,
            api_key,
        })
    }

    /// `{base_url}/audiences/{audience_id}/contacts`, with the audience id
    /// percent-encoded as a single path segment.
    fn contacts_url(&self, contact: &NewContact) -> Result<Url, ContactRegistryError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                ContactRegistryError::transport(format!(
                    "base url {} cannot carry a path",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(["audiences", contact.audience_id().as_ref(), "contacts"]);
        Ok(url)
    }
}

#[async_trait]
impl ContactRegistry for ResendContactRegistry {
    async fn create_contact(&self, contact: &NewContact) -> Result<(), ContactRegistryError> {
        let url = self.contacts_url(contact)?;
        let response = self
            .client
            .post(url)
            .bearer_auth(self.api_key.as_str())
            .json(&CreateContactDto::from(contact))
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.bytes().await.map_err(map_transport_error)?;
        Err(map_status_error(status, body.as_ref()))
    }
}

fn map_transport_error(error: reqwest::Error) -> ContactRegistryError {
    // reqwest errors may embed the request URL, never the bearer token.
    ContactRegistryError::transport(error.to_string())
}

/// Turn a non-2xx reply into a rejection, preferring Resend's own message so
/// duplicate detection sees the registry's wording.
fn map_status_error(status: StatusCode, body: &[u8]) -> ContactRegistryError {
    match serde_json::from_slice::<ResendErrorDto>(body) {
        Ok(ResendErrorDto {
            message,
            name,
            status_code,
        }) => {
            debug!(
                status = status.as_u16(),
                ?name,
                ?status_code,
                "resend rejected contact"
            );
            match message.or(name).filter(|text| !text.trim().is_empty()) {
                Some(text) => ContactRegistryError::rejected(text),
                None => ContactRegistryError::rejected(status_message(status, body)),
            }
        }
        Err(_) => ContactRegistryError::rejected(status_message(status, body)),
    }
}

fn status_message(status: StatusCode, body: &[u8]) -> String {
    let preview = body_preview(body);
    if preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {preview}", status.as_u16())
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        let preview: String = compact.chars().take(PREVIEW_CHAR_LIMIT).collect();
        format!("{preview}...")
    } else {
        compact
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AudienceId, WaitlistSignup};
    use rstest::rstest;

    fn registry(base: &str) -> ResendContactRegistry {
        ResendContactRegistry::new(
            Url::parse(base).expect("base url"),
            Zeroizing::new("re_test".to_owned()),
            Duration::from_secs(1),
        )
        .expect("client builds")
    }

    fn contact(audience: &str) -> NewContact {
        let signup =
            WaitlistSignup::try_from_parts(Some("ada@example.com"), Some("Ada"), Some("Lovelace"))
                .expect("valid signup");
        NewContact::new(&signup, AudienceId::new(audience).expect("audience"))
    }

    #[rstest]
    #[case("https://api.resend.com", "https://api.resend.com/audiences/aud_1/contacts")]
    #[case("https://api.resend.com/", "https://api.resend.com/audiences/aud_1/contacts")]
    #[case("http://127.0.0.1:9000/v1/", "http://127.0.0.1:9000/v1/audiences/aud_1/contacts")]
    fn contacts_url_appends_audience_path(#[case] base: &str, #[case] expected: &str) {
        let url = registry(base).contacts_url(&contact("aud_1")).expect("url");
        assert_eq!(url.as_str(), expected);
    }

    #[rstest]
    fn audience_id_is_a_single_encoded_segment() {
        let url = registry("https://api.resend.com")
            .contacts_url(&contact("a/b c"))
            .expect("url");
        assert_eq!(
            url.as_str(),
            "https://api.resend.com/audiences/a%2Fb%20c/contacts"
        );
    }

    #[rstest]
    fn non_path_base_url_is_a_transport_error() {
        let err = registry("mailto:ops@example.com")
            .contacts_url(&contact("aud_1"))
            .expect_err("mailto cannot carry a path");
        assert!(matches!(err, ContactRegistryError::Transport { .. }));
    }

    #[rstest]
    #[case(
        StatusCode::CONFLICT,
        r#"{"statusCode":409,"name":"validation_error","message":"Contact already exists"}"#,
        "Contact already exists"
    )]
    #[case(
        StatusCode::UNAUTHORIZED,
        r#"{"name":"missing_api_key"}"#,
        "missing_api_key"
    )]
    #[case(StatusCode::BAD_GATEWAY, "<html>\n  bad   gateway\n</html>", "status 502: <html> bad gateway </html>")]
    #[case(StatusCode::SERVICE_UNAVAILABLE, "", "status 503")]
    #[case(StatusCode::BAD_REQUEST, r#"{"message":"  "}"#, r#"status 400: {"message":" "}"#)]
    fn status_errors_keep_registry_wording(
        #[case] status: StatusCode,
        #[case] body: &str,
        #[case] expected: &str,
    ) {
        let err = map_status_error(status, body.as_bytes());
        assert!(matches!(err, ContactRegistryError::Rejected { .. }));
        assert_eq!(err.message(), expected);
    }

    #[rstest]
    fn long_bodies_are_truncated() {
        let body = "x".repeat(500);
        let preview = body_preview(body.as_bytes());
        assert_eq!(preview.chars().count(), 163);
        assert!(preview.ends_with("..."));
    }
}
