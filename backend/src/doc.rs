//! OpenAPI documentation.
//!
//! [`ApiDoc`] registers the waitlist route, the health probes and the schema
//! wrappers from [`crate::inbound::http::schemas`]. Swagger UI serves it in
//! debug builds and `openapi-dump` prints it.

use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema, SubmissionResultSchema};
use crate::inbound::http::waitlist::WaitlistRequest;
use utoipa::OpenApi;

/// OpenAPI document for the HTTP API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Waitlist API",
        description = "Join the GTM OS waitlist and probe service health."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::waitlist::join_waitlist,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        WaitlistRequest,
        SubmissionResultSchema,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "waitlist", description = "Waitlist signups"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    const SUBMISSION_RESULT_SCHEMA: &str = "waitlist_contract.SubmissionResult";

    fn object_fields(schema: &RefOr<Schema>) -> Vec<&str> {
        match schema {
            RefOr::T(Schema::Object(obj)) => obj.properties.keys().map(String::as_str).collect(),
            _ => panic!("expected Object schema"),
        }
    }

    #[test]
    fn documents_waitlist_and_probes() {
        let doc = ApiDoc::openapi();
        for path in ["/api/waitlist", "/health/ready", "/health/live"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }

    #[test]
    fn request_schema_uses_camel_case_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let request = schemas.get("WaitlistRequest").expect("WaitlistRequest schema");
        assert_eq!(object_fields(request), ["email", "firstName", "lastName"]);
    }

    #[test]
    fn submission_result_schema_is_registered() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let result = schemas
            .get(SUBMISSION_RESULT_SCHEMA)
            .expect("SubmissionResult schema");
        assert_eq!(object_fields(result), ["error", "message", "success"]);
    }
}
