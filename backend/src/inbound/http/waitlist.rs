//! `POST /api/waitlist`.
//!
//! Every request ends in a [`SubmissionResult`] with an explicit status code,
//! including bodies that are not JSON of the expected shape.

use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Scope, post, web};
use serde::Deserialize;
use tracing::warn;
use utoipa::ToSchema;
use waitlist_contract::SubmissionResult;

use super::schemas::SubmissionResultSchema;
use super::state::HttpState;
use crate::domain::ports::{JoinWaitlistRequest, WaitlistOutcome};

pub const MISSING_FIELDS_MESSAGE: &str = "All fields are required";
pub const MISSING_FIELDS_ERROR: &str = "Missing required fields";
pub const INVALID_EMAIL_MESSAGE: &str = "Invalid email format";
pub const INVALID_EMAIL_ERROR: &str = "Please provide a valid email address";
pub const NOT_CONFIGURED_MESSAGE: &str = "Server configuration error";
pub const NOT_CONFIGURED_ERROR: &str = "Resend API is not properly configured";
pub const DUPLICATE_MESSAGE: &str = "This email is already on the waitlist";
pub const DUPLICATE_ERROR: &str = "Email already registered";
pub const FAILED_MESSAGE: &str = "Failed to join waitlist";
pub const UNKNOWN_FAILURE_ERROR: &str = "An unexpected error occurred";

/// Signup request body. Every field may be omitted; the service reports
/// missing ones.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct WaitlistRequest {
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
    #[schema(example = "Ada")]
    pub first_name: Option<String>,
    #[schema(example = "Lovelace")]
    pub last_name: Option<String>,
}

impl From<WaitlistRequest> for JoinWaitlistRequest {
    fn from(value: WaitlistRequest) -> Self {
        Self {
            email: value.email,
            first_name: value.first_name,
            last_name: value.last_name,
        }
    }
}

/// Status code and body for an outcome.
pub fn render_outcome(outcome: WaitlistOutcome) -> (StatusCode, SubmissionResult) {
    match outcome {
        WaitlistOutcome::Joined => (StatusCode::OK, SubmissionResult::joined()),
        WaitlistOutcome::MissingFields => (
            StatusCode::BAD_REQUEST,
            SubmissionResult::failure(MISSING_FIELDS_MESSAGE, MISSING_FIELDS_ERROR),
        ),
        WaitlistOutcome::InvalidEmail => (
            StatusCode::BAD_REQUEST,
            SubmissionResult::failure(INVALID_EMAIL_MESSAGE, INVALID_EMAIL_ERROR),
        ),
        WaitlistOutcome::NotConfigured => (
            StatusCode::INTERNAL_SERVER_ERROR,
            SubmissionResult::failure(NOT_CONFIGURED_MESSAGE, NOT_CONFIGURED_ERROR),
        ),
        WaitlistOutcome::AlreadyRegistered => (
            StatusCode::CONFLICT,
            SubmissionResult::failure(DUPLICATE_MESSAGE, DUPLICATE_ERROR),
        ),
        WaitlistOutcome::RegistrationFailed { reason } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            generic_failure(reason),
        ),
    }
}

fn generic_failure(reason: String) -> SubmissionResult {
    if reason.trim().is_empty() {
        SubmissionResult::failure(FAILED_MESSAGE, UNKNOWN_FAILURE_ERROR)
    } else {
        SubmissionResult::failure(FAILED_MESSAGE, reason)
    }
}

fn respond((status, body): (StatusCode, SubmissionResult)) -> HttpResponse {
    HttpResponse::build(status).json(body)
}

/// Route unreadable bodies to the generic failure response.
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    warn!(error = %err, "unreadable waitlist request body");
    let response = respond((
        StatusCode::INTERNAL_SERVER_ERROR,
        generic_failure(err.to_string()),
    ));
    InternalError::from_response(err, response).into()
}

/// JSON extractor settings for the waitlist route.
///
/// The content type is not enforced, so a JSON body sent as `text/plain`
/// still parses.
pub fn waitlist_json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(json_error_handler)
}

/// Add a visitor to the waitlist.
#[utoipa::path(
    post,
    path = "/api/waitlist",
    request_body = WaitlistRequest,
    responses(
        (status = 200, description = "Joined the waitlist", body = SubmissionResultSchema),
        (status = 400, description = "Missing fields or invalid email", body = SubmissionResultSchema),
        (status = 409, description = "Email already on the waitlist", body = SubmissionResultSchema),
        (status = 500, description = "Registry unavailable, misconfigured or body unreadable", body = SubmissionResultSchema)
    ),
    tags = ["waitlist"],
    operation_id = "joinWaitlist"
)]
#[post("/waitlist")]
pub async fn join_waitlist(
    state: web::Data<HttpState>,
    payload: web::Json<WaitlistRequest>,
) -> HttpResponse {
    let outcome = state.waitlist.join(payload.into_inner().into()).await;
    respond(render_outcome(outcome))
}

/// `/api` scope serving the waitlist route with its JSON settings.
pub fn waitlist_scope() -> Scope {
    web::scope("/api")
        .app_data(waitlist_json_config())
        .service(join_waitlist)
}
