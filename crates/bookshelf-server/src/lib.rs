//! bookshelf-server: HTTP API server for the bookshelf service
//!
//! This crate provides:
//! - REST endpoints for creating authors and books and listing an
//!   author's books
//! - A usecase seam so handlers can be exercised against a fake store
//! - Request ID and access logging middleware
//! - Liveness reporting
//!
//! # Architecture
//!
//! The server is built on Axum with a middleware stack for:
//! - Request tracing and logging
//! - Request ID generation and propagation
//!
//! Handlers are generic over the [`usecase::Usecases`] trait; the
//! production binary wires in [`usecase::CoreUsecases`], which passes
//! straight through to `bookshelf-store`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use bookshelf_server::{config::ServerConfig, routes, state::AppState};
//!
//! let state = AppState::new(usecases, health);
//! let app = routes::build_router(state);
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod usecase;

// Re-exports for convenience
pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use state::{AppState, Health};
pub use usecase::{CoreUsecases, Usecases};

// Re-export dependent crates
pub use bookshelf_store;
