//! Route definitions for the HTTP API.

pub mod authors;
pub mod books;
pub mod health;

use axum::{Router, routing::get};

use crate::state::AppState;
use crate::usecase::Usecases;

/// GET / - Greeting.
async fn index() -> &'static str {
    "Hello, World!"
}

/// Build the complete router with all routes.
pub fn build_router<U: Usecases>(state: AppState<U>) -> Router {
    Router::new()
        .route("/", get(index))
        .merge(health::routes())
        .merge(authors::routes())
        .merge(books::routes())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_index_greeting() {
        assert_eq!(index().await, "Hello, World!");
    }
}
