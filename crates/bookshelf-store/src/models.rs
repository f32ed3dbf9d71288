//! Database models for the storage layer.
//!
//! These types map directly to database rows and are used for
//! sqlx queries. Every nullable column is an `Option`: `None` is
//! SQL NULL (absent), `Some("")` is an empty-but-present value.
//! The two must never be conflated by this layer.

use sqlx::FromRow;

/// Database row for the `authors` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct AuthorRow {
    pub id: i64,
    /// NULL when the author was created without a name.
    pub name: Option<String>,
}

/// Database row for the `books` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct BookRow {
    pub id: i64,
    pub title: Option<String>,
    /// NULL means "no author assigned", distinct from any real id.
    pub author_id: Option<i64>,
    pub isbn: Option<String>,
}

/// Insert parameters for a new book.
///
/// The store passes these through unchanged; an absent `author_id`
/// is inserted as NULL, never coerced to 0.
#[derive(Debug, Clone, Default)]
pub struct NewBook {
    pub title: Option<String>,
    pub author_id: Option<i64>,
    pub isbn: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_and_empty_name_are_distinct() {
        let absent = AuthorRow { id: 1, name: None };
        let empty = AuthorRow {
            id: 1,
            name: Some(String::new()),
        };
        assert_ne!(absent, empty);
    }

    #[test]
    fn new_book_defaults_to_all_absent() {
        let book = NewBook::default();
        assert!(book.title.is_none());
        assert!(book.author_id.is_none());
        assert!(book.isbn.is_none());
    }
}
