//! Default service for unmatched routes.

use actix_web::HttpRequest;

use crate::domain::{ApiResult, Error};

/// Answer unknown paths (and unsupported methods) with a JSON 404.
pub async fn not_found(req: HttpRequest) -> ApiResult<()> {
    Err(Error::not_found(format!(
        "no route for {} {}",
        req.method(),
        req.path()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, http::StatusCode, test as actix_test, web};

    #[actix_web::test]
    async fn unknown_path_is_a_json_not_found() {
        let app = actix_test::init_service(App::new().default_service(web::to(not_found))).await;
        let req = actix_test::TestRequest::get().uri("/nope").to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = actix_test::read_body_json(res).await;
        assert_eq!(
            body.get("message").and_then(serde_json::Value::as_str),
            Some("no route for GET /nope")
        );
    }
}
