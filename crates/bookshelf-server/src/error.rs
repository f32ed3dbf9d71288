//! API error types.
//!
//! Every handler returns `ApiResult<T>`; the error side converts to a
//! plain-text response carrying the error's Display message. Status and
//! body are produced together by `IntoResponse`, so a handler cannot
//! keep writing after an error response has been emitted.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// API error that can be returned from handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed request body (500).
    #[error("{0}")]
    Decode(String),

    /// Store error (500). The underlying message is surfaced verbatim,
    /// which is acceptable for an internal-facing service.
    #[error("{0}")]
    Store(#[from] bookshelf_store::StoreError),
}

impl ApiError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Decode(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_error_surfaces_message_verbatim() {
        let err = ApiError::from(bookshelf_store::StoreError::Config("boom".to_string()));
        assert_eq!(err.to_string(), "configuration error: boom");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
