//! Request ID middleware for request tracing and correlation.
//!
//! Every request gets an ID that is recorded in the `http_request` tracing
//! span, tagged on the Sentry scope and echoed in the `x-request-id` response
//! header. An upstream ID (load balancer, proxy) is reused only when it is
//! short, visible ASCII; anything else is replaced by a fresh UUID v4 so a
//! client cannot push arbitrary text into logs and error reports.

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use tracing::Span;
use uuid::Uuid;

/// The HTTP header name for request IDs.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Longest upstream request ID that is reused as-is.
pub const MAX_REQUEST_ID_LEN: usize = 128;

/// Whether an incoming `x-request-id` value may be reused.
fn accept_upstream_id(id: &str) -> bool {
    !id.is_empty() && id.len() <= MAX_REQUEST_ID_LEN && id.bytes().all(|b| b.is_ascii_graphic())
}

/// Resolve the ID for a request: the upstream one if acceptable, else a new UUID.
fn resolve_request_id(upstream: Option<&HeaderValue>) -> String {
    upstream
        .and_then(|h| h.to_str().ok())
        .filter(|id| accept_upstream_id(id))
        .map_or_else(|| Uuid::new_v4().to_string(), String::from)
}

/// Middleware that ensures every request has a request ID.
///
/// Must run inside the `TraceLayer` so the ID lands on the request span.
pub async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = resolve_request_id(request.headers().get(REQUEST_ID_HEADER));

    Span::current().record("request_id", request_id.as_str());

    sentry::configure_scope(|scope| {
        scope.set_tag("request_id", &request_id);
    });

    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}
