//! Liveness endpoint.

use axum::{Router, extract::State, http::StatusCode, routing::get};

use crate::state::AppState;
use crate::usecase::Usecases;

/// GET /healthz - Liveness check.
///
/// 204 when the process has been marked healthy, 503 otherwise. The
/// flag starts unset, so the endpoint reports unavailable until the
/// binary flips it at readiness.
async fn healthz<U: Usecases>(State(state): State<AppState<U>>) -> StatusCode {
    if state.health().get() {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// Build liveness routes.
pub fn routes<U: Usecases>() -> Router<AppState<U>> {
    Router::new().route("/healthz", get(healthz::<U>))
}
