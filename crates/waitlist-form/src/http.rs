//! Reqwest-backed waitlist transport.
//!
//! Owns transport details only: endpoint resolution, JSON encoding, and
//! mapping reqwest failures onto [`TransportError`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use waitlist_contract::{SubmissionInput, SubmissionResult, WAITLIST_PATH};

use crate::transport::{TransportError, TransportResponse, WaitlistTransport};

/// Errors raised while building an [`HttpWaitlistTransport`].
#[derive(Debug, thiserror::Error)]
pub enum HttpTransportSetupError {
    /// The base URL cannot carry the waitlist path.
    #[error("invalid waitlist endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
    /// The reqwest client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Waitlist transport issuing `POST {base}/api/waitlist`.
#[derive(Debug, Clone)]
pub struct HttpWaitlistTransport {
    client: Client,
    endpoint: Url,
}

impl HttpWaitlistTransport {
    /// Build a transport for the site rooted at `base`.
    ///
    /// # Errors
    ///
    /// Returns an error when the endpoint cannot be derived from `base` or the
    /// reqwest client cannot be constructed.
    pub fn new(base: &Url, timeout: Duration) -> Result<Self, HttpTransportSetupError> {
        let endpoint = waitlist_endpoint(base)?;
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }

    /// Fully resolved endpoint URL.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

fn waitlist_endpoint(base: &Url) -> Result<Url, url::ParseError> {
    base.join(WAITLIST_PATH)
}

#[async_trait]
impl WaitlistTransport for HttpWaitlistTransport {
    async fn post_submission(
        &self,
        input: &SubmissionInput,
    ) -> Result<TransportResponse, TransportError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .json(input)
            .send()
            .await
            .map_err(|error| TransportError::request(error.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .json::<SubmissionResult>()
            .await
            .map_err(|error| TransportError::decode(error.to_string()))?;

        Ok(TransportResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for endpoint resolution.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("https://gtmos.dev", "https://gtmos.dev/api/waitlist")]
    #[case("https://gtmos.dev/", "https://gtmos.dev/api/waitlist")]
    #[case("http://127.0.0.1:8080/some/page", "http://127.0.0.1:8080/api/waitlist")]
    fn resolves_waitlist_path_from_site_root(#[case] base: &str, #[case] expected: &str) {
        let base = Url::parse(base).expect("base url");
        let endpoint = waitlist_endpoint(&base).expect("endpoint");
        assert_eq!(endpoint.as_str(), expected);
    }
}
