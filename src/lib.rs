//! Public library: REST CRUD backend for a book catalogue on PostgreSQL.

pub mod config;
pub mod docs;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod pagination;
pub mod repository;
pub mod response;
pub mod routes;
pub mod sql;
pub mod state;
pub mod store;

pub use config::{AppConfig, DbConfig, ServerConfig};
pub use error::{AppError, ConfigError, RepoError};
pub use model::{Book, BookPage, PaginationRequest, PaginationResponse, StatusResponse};
pub use repository::{BookRepository, InMemoryBookRepository, PgBookRepository};
pub use routes::{app, book_routes, common_routes};
pub use state::AppState;
pub use store::{connect, ensure_books_table};
