//! Response construction.
//!
//! JSON bodies are pretty-printed with two-space indentation and carry an
//! explicit `Content-Length`. CORS headers are not added here; the router
//! layers stamp them on every response, including errors.

use axum::{
    body::Body,
    http::{header, HeaderValue, StatusCode},
    response::Response,
};
use serde::Serialize;

pub const APPLICATION_JSON: &str = "application/json";
pub const TEXT_PLAIN: &str = "text/plain";

/// Headers every response carries so browser clients can read it.
pub const CORS_HEADERS: [(header::HeaderName, &str); 3] = [
    (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
    (header::ACCESS_CONTROL_ALLOW_METHODS, "GET, POST, OPTIONS"),
    (header::ACCESS_CONTROL_ALLOW_HEADERS, "*"),
];

/// Serialize `payload` as a pretty JSON response.
pub fn json_response<T: Serialize>(
    status: StatusCode,
    payload: &T,
) -> Result<Response, serde_json::Error> {
    let body = serde_json::to_vec_pretty(payload)?;
    Ok(raw_response(status, APPLICATION_JSON, body))
}

/// Build a response with a fixed content type and exact length.
pub fn raw_response(status: StatusCode, content_type: &'static str, body: Vec<u8>) -> Response {
    let length = HeaderValue::from(body.len());
    let mut response = Response::new(Body::from(body));
    *response.status_mut() = status;
    let headers = response.headers_mut();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
    headers.insert(header::CONTENT_LENGTH, length);
    response
}
