use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};

/// Plain-text error body. Details stay in the log, never in the response.
pub fn text_error(status: StatusCode, message: &'static str) -> Response {
    (status, [(CONTENT_TYPE, "text/plain; charset=utf-8")], message).into_response()
}

/// 500 for a store that could not be serialized (e.g. a non-finite price).
pub fn encoding_error(err: serde_json::Error) -> Response {
    log::error!("Failed to encode inventory: {}", err);
    text_error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to encode response")
}
