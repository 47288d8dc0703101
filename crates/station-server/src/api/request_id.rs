//! Request correlation ids.
//!
//! Every request runs inside an `http` span tagged with its id, so log lines
//! from ingestion and the fleet registry can be traced back to one call. The
//! id is echoed to the client in `x-request-id`.

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::Instrument;

pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Reuse a caller-supplied id when it is non-blank, otherwise mint a UUIDv4.
fn resolve(headers: &HeaderMap) -> (String, bool) {
    let supplied = headers
        .get(&REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty());

    match supplied {
        Some(id) => (id.to_string(), true),
        None => (uuid::Uuid::new_v4().to_string(), false),
    }
}

pub async fn ensure_request_id(mut request: Request, next: Next) -> Response {
    let (request_id, supplied) = resolve(request.headers());
    let header = HeaderValue::from_str(&request_id).ok();

    if !supplied {
        if let Some(value) = header.clone() {
            request.headers_mut().insert(REQUEST_ID_HEADER, value);
        }
    }

    let span = tracing::info_span!(
        "http",
        request_id = %request_id,
        method = %request.method(),
        path = %request.uri().path()
    );
    let mut response = next.run(request).instrument(span).await;

    if let Some(value) = header {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}
