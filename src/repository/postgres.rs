//! Book CRUD execution against PostgreSQL.

use crate::error::RepoError;
use crate::model::{Book, BookPage, PaginationRequest};
use crate::pagination::PageWindow;
use crate::repository::BookRepository;
use crate::sql::{
    count_books, delete_book, insert_book, select_book_by_id, select_books_page, update_book,
    QueryBuf,
};
use async_trait::async_trait;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::Query;
use sqlx::{PgPool, Postgres, Row};

#[derive(Clone)]
pub struct PgBookRepository {
    pool: PgPool,
}

impl PgBookRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn prepare(q: &QueryBuf) -> Query<'_, Postgres, PgArguments> {
    tracing::debug!(sql = %q.sql, params = ?q.params, "query");
    q.params
        .iter()
        .fold(sqlx::query(&q.sql), |query, p| query.bind(p.clone()))
}

fn row_to_book(row: &PgRow) -> Result<Book, sqlx::Error> {
    Ok(Book {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        author: row.try_get("author")?,
        isbn: row.try_get("isbn")?,
    })
}

#[async_trait]
impl BookRepository for PgBookRepository {
    async fn list_all(&self, req: &PaginationRequest) -> Result<BookPage, RepoError> {
        let window = PageWindow::from_request(req);

        let q = count_books(&req.search);
        let total_count: i64 = prepare(&q)
            .fetch_one(&self.pool)
            .await
            .and_then(|row| row.try_get(0))
            .inspect_err(|e| tracing::error!(op = "list_all", error = %e, "failed to count books"))?;

        let q = select_books_page(&req.search, window);
        let books = prepare(&q)
            .fetch_all(&self.pool)
            .await
            .and_then(|rows| rows.iter().map(row_to_book).collect::<Result<Vec<_>, _>>())
            .inspect_err(|e| tracing::error!(op = "list_all", error = %e, "failed to fetch books"))?;

        Ok(BookPage {
            page_count: books.len() as i64,
            total_count,
            books,
        })
    }

    async fn get_by_id(&self, id: i64) -> Result<Book, RepoError> {
        let q = select_book_by_id(id);
        let row = prepare(&q)
            .fetch_optional(&self.pool)
            .await
            .inspect_err(|e| tracing::error!(op = "get_by_id", id, error = %e, "failed to get book"))?;
        match row {
            Some(row) => Ok(row_to_book(&row)?),
            None => {
                tracing::debug!(op = "get_by_id", id, "book not found");
                Err(RepoError::NotFound(id))
            }
        }
    }

    async fn create(&self, book: &mut Book) -> Result<(), RepoError> {
        let q = insert_book(book);
        let id: i64 = prepare(&q)
            .fetch_one(&self.pool)
            .await
            .and_then(|row| row.try_get("id"))
            .inspect_err(|e| tracing::error!(op = "create", title = %book.title, error = %e, "failed to create book"))?;
        book.id = id;
        Ok(())
    }

    async fn update(&self, book: &Book) -> Result<(), RepoError> {
        let q = update_book(book);
        let result = prepare(&q)
            .execute(&self.pool)
            .await
            .inspect_err(|e| tracing::error!(op = "update", id = book.id, error = %e, "failed to update book"))?;
        if result.rows_affected() == 0 {
            tracing::debug!(op = "update", id = book.id, "no book to update");
            return Err(RepoError::NotFound(book.id));
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        let q = delete_book(id);
        let result = prepare(&q)
            .execute(&self.pool)
            .await
            .inspect_err(|e| tracing::error!(op = "delete", id, error = %e, "failed to delete book"))?;
        if result.rows_affected() == 0 {
            tracing::debug!(op = "delete", id, "no book to delete");
            return Err(RepoError::NotFound(id));
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), RepoError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
