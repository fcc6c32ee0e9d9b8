use axum::extract::State;
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};

use super::AppState;
use super::errors;

/// `GET`: the whole store as a JSON array, encoded under the store's read lock.
pub async fn list_inventory(State(state): State<AppState>) -> Response {
    match state.store.to_json() {
        Ok(body) => ([(CONTENT_TYPE, "application/json")], body).into_response(),
        Err(e) => errors::encoding_error(e),
    }
}

/// `OPTIONS`: CORS preflight, empty 200.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

pub async fn method_not_allowed() -> Response {
    errors::text_error(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}
