//! OpenAPI schemas for types defined outside this adapter.
//!
//! The domain error and the shared `SubmissionResult` stay free of utoipa;
//! these wrappers describe them for the generated document.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// No route matched the request.
    #[schema(rename = "not_found")]
    NotFound,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[schema(rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "not_found")]
    code: ErrorCodeSchema,
    /// Human-readable message.
    #[schema(example = "no route for GET /nope")]
    message: String,
    /// Correlation identifier, also sent as the `trace-id` header.
    #[schema(example = "67e55044-10b1-426f-9247-bb680e5fe0c8")]
    trace_id: Option<String>,
}

/// OpenAPI schema for [`waitlist_contract::SubmissionResult`].
#[derive(ToSchema)]
#[schema(as = waitlist_contract::SubmissionResult)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct SubmissionResultSchema {
    /// Whether the visitor was added to the waitlist.
    #[schema(example = true)]
    success: bool,
    /// Human readable outcome.
    #[schema(example = "Successfully joined the waitlist! We'll be in touch soon.")]
    message: String,
    /// Failure detail; omitted on success.
    #[schema(example = "Email already registered")]
    error: Option<String>,
}
