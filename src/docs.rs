//! OpenAPI document for the v1 API.

use crate::error::{ErrorBody, ErrorDetail};
use crate::handlers::{books, health};
use crate::model::{Book, PaginationRequest, PaginationResponse, StatusResponse};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Public Library API",
        description = "A minimal REST API for managing books in a public library"
    ),
    servers((url = "/api/v1")),
    paths(
        health::health,
        books::get_books,
        books::get_book_by_id,
        books::create_book,
        books::update_book,
        books::delete_book,
    ),
    components(schemas(
        Book,
        PaginationRequest,
        PaginationResponse,
        StatusResponse,
        ErrorBody,
        ErrorDetail
    )),
    tags(
        (name = "books", description = "Book CRUD"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        for p in ["/health", "/books/list", "/books/create", "/books/{id}"] {
            assert!(paths.contains(&p), "missing {p}");
        }
    }

    #[test]
    fn book_schema_is_registered() {
        let doc = ApiDoc::openapi();
        let schemas = doc.components.expect("components").schemas;
        assert!(schemas.contains_key("Book"));
        assert!(schemas.contains_key("PaginationResponse"));
    }
}
