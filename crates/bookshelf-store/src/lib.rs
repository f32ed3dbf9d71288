//! bookshelf-store: Storage layer for the bookshelf service
//!
//! This crate provides:
//! - PostgreSQL storage for authors and books
//! - Embedded schema bootstrap
//! - Type-safe database operations via sqlx
//!
//! # Architecture
//!
//! Each operation is a single parameterized statement executed against
//! a shared connection pool. There is no business logic here: the crate
//! translates between typed parameters/results and SQL, nothing more.
//! Nullable columns are carried as `Option<T>` end to end so that an
//! absent value round-trips as SQL NULL rather than a zero default.
//!
//! # Usage
//!
//! ```rust,ignore
//! use bookshelf_store::{Store, StoreConfig};
//!
//! let config = StoreConfig::from_env()?;
//! let store = Store::connect(config).await?;
//!
//! let author = store.create_author(Some("Jane Austen")).await?;
//! let books = store.books_by_author(author.id).await?;
//! ```

pub mod error;
pub mod models;
pub mod schema;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use models::{AuthorRow, BookRow, NewBook};
pub use store::{Store, StoreConfig};
