use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use yakshop_core::DomainError;
use yakshop_herd::HerdImportError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
    }
}

pub fn import_error_to_response(err: HerdImportError) -> axum::response::Response {
    match err {
        HerdImportError::Domain(e) => domain_error_to_response(e),
        HerdImportError::Xml(e) => json_error(StatusCode::BAD_REQUEST, "malformed_herd", e.to_string()),
        HerdImportError::Json(e) => json_error(StatusCode::BAD_REQUEST, "malformed_herd", e.to_string()),
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    let message = message.into();
    tracing::warn!(status = status.as_u16(), code, %message, "request rejected");
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message,
        })),
    )
        .into_response()
}
