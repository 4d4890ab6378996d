//! Book CRUD handlers: list, read, create, update, delete.

use crate::error::{AppError, ErrorBody, RepoError};
use crate::extractors::{BookId, JsonBody};
use crate::model::{Book, PaginationRequest, PaginationResponse};
use crate::response::{created, no_content, ok};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

/// POST /books/list: paginated list with optional search over title and author.
#[utoipa::path(
    post,
    path = "/books/list",
    tag = "books",
    request_body = PaginationRequest,
    responses(
        (status = 200, description = "One page of books", body = PaginationResponse),
        (status = 400, description = "Undecodable request body", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody),
    )
)]
pub async fn get_books(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<PaginationRequest>,
) -> Result<impl IntoResponse, AppError> {
    // List has no missing-id case: any repository error is a storage failure.
    let page = state.repo.list_all(&req).await.map_err(|e| match e {
        RepoError::Db(e) => AppError::Db(e),
        RepoError::NotFound(_) => AppError::Db(sqlx::Error::RowNotFound),
    })?;
    Ok(ok(PaginationResponse::from(page)))
}

#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "The book", body = Book),
        (status = 400, description = "Non-numeric id", body = ErrorBody),
        (status = 404, description = "No book with this id", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody),
    )
)]
pub async fn get_book_by_id(
    State(state): State<AppState>,
    BookId(id): BookId,
) -> Result<impl IntoResponse, AppError> {
    let book = state.repo.get_by_id(id).await?;
    Ok(ok(book))
}

/// POST /books/create: any `id` in the body is ignored.
#[utoipa::path(
    post,
    path = "/books/create",
    tag = "books",
    request_body = Book,
    responses(
        (status = 201, description = "Created book with its assigned id", body = Book),
        (status = 400, description = "Undecodable request body", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody),
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    JsonBody(mut book): JsonBody<Book>,
) -> Result<impl IntoResponse, AppError> {
    state.repo.create(&mut book).await?;
    tracing::info!(id = book.id, "book created");
    Ok(created(book))
}

/// PUT /books/{id}: full overwrite; the path id wins over any body id.
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    request_body = Book,
    responses(
        (status = 200, description = "Updated book", body = Book),
        (status = 400, description = "Non-numeric id or undecodable body", body = ErrorBody),
        (status = 404, description = "No book with this id", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody),
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    BookId(id): BookId,
    JsonBody(mut book): JsonBody<Book>,
) -> Result<impl IntoResponse, AppError> {
    book.id = id;
    state.repo.update(&book).await?;
    Ok(ok(book))
}

#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 400, description = "Non-numeric id", body = ErrorBody),
        (status = 404, description = "No book with this id", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody),
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    BookId(id): BookId,
) -> Result<impl IntoResponse, AppError> {
    state.repo.delete(id).await?;
    tracing::info!(id, "book deleted");
    Ok(no_content())
}
