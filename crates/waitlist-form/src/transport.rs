//! Transport seam between the form controller and the waitlist endpoint.

use async_trait::async_trait;
use waitlist_contract::{SubmissionInput, SubmissionResult};

/// Decoded reply from the waitlist endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Decoded JSON body.
    pub body: SubmissionResult,
}

impl TransportResponse {
    /// Whether the status code is in the 2xx range.
    #[must_use]
    pub const fn is_success_status(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// The submission request could not complete.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The request was not sent or no response arrived.
    #[error("waitlist request failed: {message}")]
    Request {
        /// Underlying failure text.
        message: String,
    },
    /// A response arrived but its body was not a submission result.
    #[error("waitlist response could not be decoded: {message}")]
    Decode {
        /// Underlying failure text.
        message: String,
    },
}

impl TransportError {
    /// Build a [`TransportError::Request`].
    #[must_use]
    pub fn request(message: impl Into<String>) -> Self {
        Self::Request {
            message: message.into(),
        }
    }

    /// Build a [`TransportError::Decode`].
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}

/// Sends one submission to the waitlist endpoint.
#[async_trait]
pub trait WaitlistTransport: Send + Sync {
    /// Post `input` and return the decoded reply.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when the request cannot complete or the body
    /// cannot be decoded. Non-2xx statuses with a decodable body are returned
    /// as `Ok`.
    async fn post_submission(
        &self,
        input: &SubmissionInput,
    ) -> Result<TransportResponse, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(
        TransportError::request("connection refused"),
        "waitlist request failed: connection refused"
    )]
    #[case(
        TransportError::decode("expected value at line 1"),
        "waitlist response could not be decoded: expected value at line 1"
    )]
    fn constructors_keep_the_failure_text(#[case] error: TransportError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case(200, true)]
    #[case(204, true)]
    #[case(299, true)]
    #[case(300, false)]
    #[case(409, false)]
    #[case(500, false)]
    fn classifies_success_statuses(#[case] status: u16, #[case] expected: bool) {
        let response = TransportResponse {
            status,
            body: SubmissionResult::joined(),
        };
        assert_eq!(response.is_success_status(), expected);
    }
}
