//! Author routes: creation and listing an author's books.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::StringRejection},
    http::StatusCode,
    routing::{get, post},
};

use crate::error::{ApiError, ApiResult};
use crate::routes::books::Book;
use crate::state::AppState;
use crate::usecase::Usecases;

/// POST /author - Create an author.
///
/// The body is the raw name string, not JSON. An empty body creates an
/// author with an empty (but present) name.
///
/// # Response
///
/// - 201 Created: the new author's id as text
/// - 500: unreadable body or store failure, message as body
async fn create_author<U: Usecases>(
    State(state): State<AppState<U>>,
    body: Result<String, StringRejection>,
) -> ApiResult<(StatusCode, String)> {
    let name = body.map_err(|e| ApiError::Decode(e.to_string()))?;

    let author = state.usecases().create_author(Some(name)).await?;

    Ok((StatusCode::CREATED, author.id.to_string()))
}

/// GET /author/{id}/books - List an author's books.
///
/// # Response
///
/// - 200 OK: JSON array of books; empty for an unknown author
/// - 400: non-integer path id (extractor rejection)
/// - 500: store failure, message as body
async fn books_by_author<U: Usecases>(
    State(state): State<AppState<U>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Vec<Book>>> {
    let books = state.usecases().books_by_author(id).await?;

    Ok(Json(books.into_iter().map(Book::from).collect()))
}

/// Build author routes.
pub fn routes<U: Usecases>() -> Router<AppState<U>> {
    Router::new()
        .route("/author", post(create_author::<U>))
        .route("/author/{id}/books", get(books_by_author::<U>))
}
