//! Book creation route and the book JSON shape.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    routing::post,
};
use serde::{Deserialize, Serialize};

use bookshelf_store::{BookRow, NewBook};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use crate::usecase::Usecases;

/// Wire shape for a book: `{"title", "isbn", "author_id"}`.
///
/// Absent title/isbn serialize as empty strings; only `author_id`
/// keeps a null to preserve the "no author assigned" state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub isbn: String,
    pub author_id: Option<i64>,
}

impl From<BookRow> for Book {
    fn from(row: BookRow) -> Self {
        Self {
            title: row.title.unwrap_or_default(),
            isbn: row.isbn.unwrap_or_default(),
            author_id: row.author_id,
        }
    }
}

/// Request body for POST /books.
#[derive(Debug, Deserialize)]
pub struct CreateBookRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub isbn: Option<String>,
    #[serde(default)]
    pub author_id: Option<i64>,
}

/// Collapse the JSON-edge sentinel: an `author_id` of 0 or null both
/// mean "no association". Internally only `None` represents absence.
fn normalize_author_id(author_id: Option<i64>) -> Option<i64> {
    author_id.filter(|&id| id != 0)
}

/// POST /books - Create a book.
///
/// # Response
///
/// - 201 Created: JSON of the book as persisted
/// - 500: malformed JSON body or store failure, message as body
async fn create_book<U: Usecases>(
    State(state): State<AppState<U>>,
    payload: Result<Json<CreateBookRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Book>)> {
    let Json(req) = payload.map_err(|e| ApiError::Decode(e.to_string()))?;

    let book = state
        .usecases()
        .create_book(NewBook {
            title: req.title,
            author_id: normalize_author_id(req.author_id),
            isbn: req.isbn,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(Book::from(book))))
}

/// Build book routes.
pub fn routes<U: Usecases>() -> Router<AppState<U>> {
    Router::new().route("/books", post(create_book::<U>))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_author_id_collapses_to_none() {
        assert_eq!(normalize_author_id(Some(0)), None);
        assert_eq!(normalize_author_id(None), None);
        assert_eq!(normalize_author_id(Some(7)), Some(7));
    }

    #[test]
    fn book_json_round_trips() {
        let book = Book {
            title: "Emma".to_string(),
            isbn: "111".to_string(),
            author_id: Some(3),
        };
        let json = serde_json::to_string(&book).unwrap();
        let back: Book = serde_json::from_str(&json).unwrap();
        assert_eq!(back, book);
    }

    #[test]
    fn absent_columns_encode_as_empty_strings() {
        let row = BookRow {
            id: 1,
            title: None,
            author_id: None,
            isbn: None,
        };
        let book = Book::from(row);
        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"title": "", "isbn": "", "author_id": null})
        );
    }

    #[test]
    fn request_fields_default_to_absent() {
        let req: CreateBookRequest = serde_json::from_str("{}").unwrap();
        assert!(req.title.is_none());
        assert!(req.isbn.is_none());
        assert!(req.author_id.is_none());
    }
}
