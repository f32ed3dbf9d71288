//! Access logging middleware.

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Request},
    middleware::Next,
    response::Response,
};
use http::{Method, StatusCode};

use super::request_id::REQUEST_ID_HEADER;

/// Captured request fields, emitted as one access line on drop.
///
/// Logging from `Drop` gives defer semantics: the line fires when the
/// handler completes normally, and also when a panic unwinds the
/// request future before a response exists. In the latter case the
/// status field reads "unknown".
struct AccessLogGuard {
    request_id: String,
    method: Method,
    path: String,
    remote_addr: String,
    user_agent: String,
    status: Option<StatusCode>,
}

impl Drop for AccessLogGuard {
    fn drop(&mut self) {
        let status = self
            .status
            .map(|s| s.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        tracing::info!(
            request_id = %self.request_id,
            method = %self.method,
            path = %self.path,
            remote_addr = %self.remote_addr,
            user_agent = %self.user_agent,
            status = %status,
            "request completed"
        );
    }
}

/// Middleware that emits one structured access line per request.
///
/// The line carries the request ID the request ID layer set (or the
/// literal "unknown" if that lookup fails), method, path, remote
/// address, and user-agent. It is emitted for every request that
/// enters the middleware, error responses and panicking handlers
/// included.
pub async fn access_log(request: Request, next: Next) -> Response {
    let mut guard = AccessLogGuard {
        request_id: request
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("unknown")
            .to_string(),
        method: request.method().clone(),
        path: request.uri().path().to_string(),
        remote_addr: request
            .extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.to_string())
            .unwrap_or_else(|| "unknown".to_string()),
        user_agent: request
            .headers()
            .get(http::header::USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string(),
        status: None,
    };

    let response = next.run(request).await;

    guard.status = Some(response.status());
    response
}
