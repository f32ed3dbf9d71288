//! Request ID middleware for tracing requests.
//!
//! Inbound `x-request-id` headers are honored; when absent, an ID is
//! derived from the current time in nanoseconds. That is not
//! cryptographically unique, but collisions are harmless at this layer
//! since the ID is only a log correlation key.

use std::time::{SystemTime, UNIX_EPOCH};

use axum::{extract::Request, middleware::Next, response::Response};
use http::HeaderValue;
use tower_http::request_id::{MakeRequestId, RequestId};

/// Header name for request ID.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Generate timestamp-based request IDs.
#[derive(Clone, Copy, Debug, Default)]
pub struct MakeRequestNanos;

impl MakeRequestId for MakeRequestNanos {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        HeaderValue::from_str(&nanos.to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Tower layer for request ID generation.
pub type RequestIdLayer = tower_http::request_id::SetRequestIdLayer<MakeRequestNanos>;

/// Create a new request ID layer.
///
/// Only generates an ID when the inbound request does not carry one.
pub fn request_id_layer() -> RequestIdLayer {
    tower_http::request_id::SetRequestIdLayer::new(
        REQUEST_ID_HEADER.parse().unwrap(),
        MakeRequestNanos,
    )
}

/// Middleware that propagates the request ID to response headers.
pub async fn propagate_request_id(request: Request, next: Next) -> Response {
    let request_id = request.headers().get(REQUEST_ID_HEADER).cloned();

    let mut response = next.run(request).await;

    if let Some(id) = request_id {
        response.headers_mut().insert(REQUEST_ID_HEADER, id);
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_numeric() {
        let mut make = MakeRequestNanos;
        let request = http::Request::new(());
        let id = make.make_request_id(&request).unwrap();
        let value = id.header_value().to_str().unwrap();
        assert!(value.parse::<u128>().is_ok());
    }
}
