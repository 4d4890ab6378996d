//! Book persistence behind a trait, so handlers can run against PostgreSQL or an in-memory store.

mod memory;
mod postgres;

pub use memory::InMemoryBookRepository;
pub use postgres::PgBookRepository;

use crate::error::RepoError;
use crate::model::{Book, BookPage, PaginationRequest};
use async_trait::async_trait;

#[async_trait]
pub trait BookRepository: Send + Sync {
    /// One page of books matching `req.search`, plus the total match count.
    /// Count and page are separate reads and may disagree under concurrent writes.
    async fn list_all(&self, req: &PaginationRequest) -> Result<BookPage, RepoError>;

    async fn get_by_id(&self, id: i64) -> Result<Book, RepoError>;

    /// Insert the book and write the assigned id back into it.
    async fn create(&self, book: &mut Book) -> Result<(), RepoError>;

    /// Overwrite title, author and isbn of the row with `book.id`.
    async fn update(&self, book: &Book) -> Result<(), RepoError>;

    async fn delete(&self, id: i64) -> Result<(), RepoError>;

    /// Cheap liveness probe against storage.
    async fn ping(&self) -> Result<(), RepoError>;
}
