use axum::extract::State;
use axum::http::HeaderValue;
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    InvalidHeaderValue,
};
use axum::response::Response;

/// Cross-origin policy: a single allowed origin, `GET`/`OPTIONS`, `Content-Type` header.
#[derive(Clone, Debug)]
pub struct CorsPolicy {
    allow_origin: HeaderValue,
}

impl CorsPolicy {
    pub const ALLOW_METHODS: &'static str = "GET, OPTIONS";
    pub const ALLOW_HEADERS: &'static str = "Content-Type";

    pub fn new(allow_origin: &str) -> Result<Self, InvalidHeaderValue> {
        Ok(Self {
            allow_origin: HeaderValue::from_str(allow_origin)?,
        })
    }

    pub fn allow_origin(&self) -> &HeaderValue {
        &self.allow_origin
    }
}

/// Response middleware: stamp the CORS headers on every response, errors included.
pub async fn apply_cors_headers(
    State(cors): State<CorsPolicy>,
    mut response: Response,
) -> Response {
    let headers = response.headers_mut();
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, cors.allow_origin);
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(CorsPolicy::ALLOW_METHODS),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(CorsPolicy::ALLOW_HEADERS),
    );
    response
}
