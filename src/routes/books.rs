//! Book CRUD routes. `/books/list` and `/books/create` are static and take precedence over `/books/:id`.

use crate::handlers::books::{create_book, delete_book, get_book_by_id, get_books, update_book};
use crate::state::AppState;
use axum::{routing::get, routing::post, Router};

pub fn book_routes(state: AppState) -> Router {
    Router::new()
        .route("/books/list", post(get_books))
        .route("/books/create", post(create_book))
        .route(
            "/books/:id",
            get(get_book_by_id).put(update_book).delete(delete_book),
        )
        .with_state(state)
}
