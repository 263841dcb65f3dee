//! Canned endpoint handlers.
//!
//! A single fallback handler receives every request and dispatches on
//! [`Endpoint`]. Handlers are stateless apart from the configured limits,
//! so concurrent requests never coordinate.

use std::borrow::Cow;
use std::str::FromStr;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{header, HeaderMap, HeaderValue, Request, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::LimitsConfig;
use crate::http::endpoint::Endpoint;
use crate::http::error::ResponderError;
use crate::http::query::QueryParams;
use crate::http::response::{json_response, raw_response, TEXT_PLAIN};
use crate::observability::metrics;

/// State shared by every handler invocation.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub limits: LimitsConfig,
}

#[derive(Serialize)]
struct RootPayload {
    message: &'static str,
    timestamp: f64,
}

#[derive(Serialize)]
struct TestPayload<'a> {
    status: &'static str,
    path: &'a str,
    query: &'a QueryParams,
}

#[derive(Serialize)]
struct MessagePayload {
    message: String,
}

#[derive(Serialize)]
struct HeadersPayload {
    headers: Map<String, Value>,
}

#[derive(Serialize)]
struct UserAgentPayload<'a> {
    user_agent: Cow<'a, str>,
}

#[derive(Serialize)]
struct StatusPayload {
    status_code: u16,
}

#[derive(Serialize)]
struct NotFoundPayload<'a> {
    error: &'static str,
    path: &'a str,
}

#[derive(Serialize)]
struct EchoPayload<'a> {
    method: &'static str,
    data: String,
    content_type: Cow<'a, str>,
}

#[derive(Serialize)]
struct UnsupportedPayload<'a> {
    error: &'static str,
    method: &'a str,
}

/// Fallback handler for every request on both listeners.
pub async fn dispatch(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let endpoint = Endpoint::classify(&method, request.uri().path());

    tracing::debug!(
        method = %method,
        path = %request.uri().path(),
        endpoint = endpoint.name(),
        "Dispatching request"
    );

    let response = handle(endpoint, &state, request)
        .await
        .unwrap_or_else(IntoResponse::into_response);

    metrics::record_request(
        method.as_str(),
        endpoint.name(),
        response.status().as_u16(),
        start,
    );
    response
}

async fn handle(
    endpoint: Endpoint,
    state: &AppState,
    request: Request<Body>,
) -> Result<Response, ResponderError> {
    let query = QueryParams::parse(request.uri().query());
    let path = request.uri().path();

    match endpoint {
        Endpoint::Root => root(),
        Endpoint::Test => test(path, &query),
        Endpoint::Delay => delay(&query, &state.limits).await,
        Endpoint::Headers => headers(request.headers()),
        Endpoint::UserAgent => user_agent(request.headers()),
        Endpoint::Status => status(&query),
        Endpoint::Large => large(&query, &state.limits),
        Endpoint::NotFound => Ok(json_response(
            StatusCode::NOT_FOUND,
            &NotFoundPayload {
                error: "Not found",
                path,
            },
        )?),
        Endpoint::Echo => echo(request).await,
        Endpoint::Unsupported => Ok(json_response(
            StatusCode::NOT_IMPLEMENTED,
            &UnsupportedPayload {
                error: "Unsupported method",
                method: request.method().as_str(),
            },
        )?),
    }
}

fn root() -> Result<Response, ResponderError> {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs_f64())
        .unwrap_or_default();

    Ok(json_response(
        StatusCode::OK,
        &RootPayload {
            message: "Mock server is running",
            timestamp,
        },
    )?)
}

fn test(path: &str, query: &QueryParams) -> Result<Response, ResponderError> {
    Ok(json_response(
        StatusCode::OK,
        &TestPayload {
            status: "ok",
            path,
            query,
        },
    )?)
}

/// Sleep for the requested number of seconds, capped, then echo the
/// requested (not the slept) value.
async fn delay(query: &QueryParams, limits: &LimitsConfig) -> Result<Response, ResponderError> {
    let seconds: u64 = parse_param(query, "seconds", "1")?;
    let slept = seconds.min(limits.max_delay_secs);

    tokio::time::sleep(Duration::from_secs(slept)).await;

    Ok(json_response(
        StatusCode::OK,
        &MessagePayload {
            message: format!("Delayed response by {seconds} seconds"),
        },
    )?)
}

fn headers(headers: &HeaderMap) -> Result<Response, ResponderError> {
    let mut echoed = Map::new();
    for (name, value) in headers {
        // Repeated names keep their first position but take the last value.
        echoed.insert(
            name.as_str().to_string(),
            Value::String(header_text(value).into_owned()),
        );
    }

    Ok(json_response(
        StatusCode::OK,
        &HeadersPayload { headers: echoed },
    )?)
}

fn user_agent(headers: &HeaderMap) -> Result<Response, ResponderError> {
    let user_agent = headers
        .get(header::USER_AGENT)
        .map(header_text)
        .unwrap_or(Cow::Borrowed("Unknown"));

    Ok(json_response(StatusCode::OK, &UserAgentPayload { user_agent })?)
}

/// Respond with whatever final status code was asked for.
///
/// 1xx codes are informational and cannot end an exchange, so they are
/// rejected along with codes outside the three-digit range.
fn status(query: &QueryParams) -> Result<Response, ResponderError> {
    let code: u16 = parse_param(query, "code", "200")?;
    let status = StatusCode::from_u16(code)
        .ok()
        .filter(|status| !status.is_informational())
        .ok_or(ResponderError::InvalidStatus(code))?;

    let mut response = json_response(status, &StatusPayload { status_code: code })?;
    if matches!(status, StatusCode::NO_CONTENT | StatusCode::NOT_MODIFIED) {
        // The body is never sent for these, so no length is advertised.
        response.headers_mut().remove(header::CONTENT_LENGTH);
    }
    Ok(response)
}

fn large(query: &QueryParams, limits: &LimitsConfig) -> Result<Response, ResponderError> {
    let requested: i64 = parse_param(query, "size", "1024")?;
    let size = usize::try_from(requested.max(0))
        .unwrap_or(usize::MAX)
        .min(limits.max_large_bytes);

    Ok(raw_response(StatusCode::OK, TEXT_PLAIN, vec![b'x'; size]))
}

/// Echo a POST body back, whatever the path.
async fn echo(request: Request<Body>) -> Result<Response, ResponderError> {
    let (parts, body) = request.into_parts();

    let declared_length = parts
        .headers
        .get(header::CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<u64>().ok())
        .unwrap_or(0);

    // Without a declared length the body is treated as empty.
    let data = if declared_length > 0 {
        axum::body::to_bytes(body, usize::MAX).await?
    } else {
        Bytes::new()
    };

    let content_type = parts
        .headers
        .get(header::CONTENT_TYPE)
        .map(header_text)
        .unwrap_or(Cow::Borrowed(""));

    Ok(json_response(
        StatusCode::OK,
        &EchoPayload {
            method: "POST",
            data: decode_utf8_ignoring_invalid(&data),
            content_type,
        },
    )?)
}

fn parse_param<T: FromStr>(
    query: &QueryParams,
    name: &'static str,
    default: &str,
) -> Result<T, ResponderError> {
    let raw = query.first(name).unwrap_or(default);
    raw.trim()
        .parse()
        .map_err(|_| ResponderError::InvalidQuery {
            name,
            value: raw.to_string(),
        })
}

fn header_text(value: &HeaderValue) -> Cow<'_, str> {
    String::from_utf8_lossy(value.as_bytes())
}

/// Decode UTF-8, dropping byte sequences that are not valid.
pub fn decode_utf8_ignoring_invalid(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}
