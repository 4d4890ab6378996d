//! Book entity and request/response shapes. Field names are the wire contract.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A book record. `id` is assigned by storage on create.
///
/// Every field defaults when absent, so an update body that omits a field
/// overwrites it with the empty value (no merge).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Book {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "The Great Gatsby")]
    pub title: String,
    #[schema(example = "F. Scott Fitzgerald")]
    pub author: String,
    #[schema(example = "9780743273565")]
    pub isbn: String,
}

/// Body of `POST /books/list`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct PaginationRequest {
    /// 1-based page number. Values below 1 are treated as 1.
    pub page: i64,
    /// Rows per page. 0 or negative means the default (10); capped at 100.
    pub page_size: i64,
    /// Case-insensitive substring matched against title or author. Empty means no filter.
    pub search: String,
}

/// One page of books as returned by the repository.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookPage {
    pub books: Vec<Book>,
    /// Rows actually returned in this page.
    pub page_count: i64,
    /// Rows matching the filter, ignoring the page window.
    pub total_count: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PaginationResponse {
    pub total_count: i64,
    pub page_count: i64,
    pub data: Vec<Book>,
}

impl From<BookPage> for PaginationResponse {
    fn from(page: BookPage) -> Self {
        PaginationResponse {
            total_count: page.total_count,
            page_count: page.page_count,
            data: page.books,
        }
    }
}

pub const STATUS_OK: &str = "ok";
pub const STATUS_DEGRADED: &str = "degraded";
pub const STATUS_ERROR: &str = "error";

/// Health check payload. The HTTP status is always 200; `status` carries the state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    #[schema(example = "ok")]
    pub status: String,
    #[schema(example = "v0.1.0")]
    pub version: String,
    #[schema(example = "2024-01-01T00:00:00Z")]
    pub timestamp: String,
    #[schema(example = "ok")]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_book_fields_decode_to_empty() {
        let book: Book = serde_json::from_str(r#"{"title": "Dune"}"#).unwrap();
        assert_eq!(
            book,
            Book {
                id: 0,
                title: "Dune".into(),
                author: String::new(),
                isbn: String::new(),
            }
        );
    }

    #[test]
    fn empty_pagination_body_decodes_to_defaults() {
        let req: PaginationRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req, PaginationRequest::default());
    }

    #[test]
    fn wrong_field_type_is_rejected() {
        assert!(serde_json::from_str::<PaginationRequest>(r#"{"page": "one"}"#).is_err());
    }

    #[test]
    fn pagination_response_uses_wire_names() {
        let body = serde_json::to_value(PaginationResponse::from(BookPage {
            books: vec![],
            page_count: 0,
            total_count: 7,
        }))
        .unwrap();
        assert_eq!(body, serde_json::json!({"total_count": 7, "page_count": 0, "data": []}));
    }
}
