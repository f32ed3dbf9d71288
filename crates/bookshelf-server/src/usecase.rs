//! Usecase seam between the HTTP layer and the store.
//!
//! Handlers depend on the [`Usecases`] trait rather than the concrete
//! store, so the router can be exercised in tests with an in-memory
//! fake. The production implementation is a direct pass-through; it
//! adds no validation, retries, or transformation.
//!
//! `delete_author` exists on the store but is deliberately not exposed
//! here: nothing above this layer calls it yet.

use std::future::Future;

use bookshelf_store::{AuthorRow, BookRow, NewBook, Store, StoreResult};

/// The operations the HTTP layer needs from storage.
pub trait Usecases: Send + Sync + 'static {
    /// Create an author, returning the row as persisted.
    fn create_author(
        &self,
        name: Option<String>,
    ) -> impl Future<Output = StoreResult<AuthorRow>> + Send;

    /// Create a book, returning the row as persisted.
    fn create_book(&self, book: NewBook) -> impl Future<Output = StoreResult<BookRow>> + Send;

    /// List the books belonging to an author. Empty for unknown ids.
    fn books_by_author(
        &self,
        author_id: i64,
    ) -> impl Future<Output = StoreResult<Vec<BookRow>>> + Send;
}

/// Production usecases backed by the PostgreSQL store.
#[derive(Debug, Clone)]
pub struct CoreUsecases {
    store: Store,
}

impl CoreUsecases {
    /// Create usecases over the given store.
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

impl Usecases for CoreUsecases {
    async fn create_author(&self, name: Option<String>) -> StoreResult<AuthorRow> {
        let author = self.store.create_author(name.as_deref()).await?;
        tracing::debug!(author_id = author.id, "created author");
        Ok(author)
    }

    async fn create_book(&self, book: NewBook) -> StoreResult<BookRow> {
        let book = self.store.create_book(&book).await?;
        tracing::debug!(book_id = book.id, "created book");
        Ok(book)
    }

    async fn books_by_author(&self, author_id: i64) -> StoreResult<Vec<BookRow>> {
        self.store.books_by_author(author_id).await
    }
}
