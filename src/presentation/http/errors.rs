use poem::{
    Response,
    error::{MethodNotAllowedError, NotFoundError},
    http::{StatusCode, header},
};
use poem_openapi::error::{ContentTypeError, ParseRequestPayloadError};

use crate::presentation::http::security::BASIC_CHALLENGE;

/// Boundary renderer: every error that escapes a handler becomes a JSON body
/// of the shape `{"error": message}` with the appropriate status.
pub async fn error_response(err: poem::Error) -> Response {
    let (status, message) = if err.is::<NotFoundError>() || err.is::<MethodNotAllowedError>() {
        (StatusCode::NOT_FOUND, "Not found".to_string())
    } else if err.is::<ParseRequestPayloadError>() || err.is::<ContentTypeError>() {
        (StatusCode::BAD_REQUEST, "Invalid JSON".to_string())
    } else if err.status() == StatusCode::UNAUTHORIZED {
        (StatusCode::UNAUTHORIZED, "Unauthorized".to_string())
    } else {
        (err.status(), err.to_string())
    };

    if status.is_server_error() {
        tracing::error!(%status, error = %err, "request failed");
    }

    let body = serde_json::json!({ "error": message }).to_string();
    let mut builder = Response::builder()
        .status(status)
        .content_type("application/json");
    if status == StatusCode::UNAUTHORIZED {
        builder = builder.header(header::WWW_AUTHENTICATE, BASIC_CHALLENGE);
    }
    builder.body(body)
}
