//! In-memory book store with the same filtering and paging rules as PostgreSQL.
//! Used by tests and for running the router without a database.

use crate::error::RepoError;
use crate::model::{Book, BookPage, PaginationRequest};
use crate::pagination::PageWindow;
use crate::repository::BookRepository;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

pub struct InMemoryBookRepository {
    books: RwLock<Store>,
    available: AtomicBool,
}

#[derive(Default)]
struct Store {
    rows: BTreeMap<i64, Book>,
    last_id: i64,
}

impl Default for InMemoryBookRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self {
            books: RwLock::new(Store::default()),
            available: AtomicBool::new(true),
        }
    }

    /// When false, every operation fails as if storage were unreachable.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), RepoError> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(RepoError::Db(sqlx::Error::PoolClosed))
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Store>, RepoError> {
        self.check_available()?;
        self.books
            .read()
            .map_err(|_| RepoError::Db(sqlx::Error::WorkerCrashed))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Store>, RepoError> {
        self.check_available()?;
        self.books
            .write()
            .map_err(|_| RepoError::Db(sqlx::Error::WorkerCrashed))
    }
}

fn matches_search(book: &Book, needle: &str) -> bool {
    needle.is_empty()
        || book.title.to_lowercase().contains(needle)
        || book.author.to_lowercase().contains(needle)
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn list_all(&self, req: &PaginationRequest) -> Result<BookPage, RepoError> {
        let window = PageWindow::from_request(req);
        let needle = req.search.trim().to_lowercase();
        let store = self.read()?;
        let matching: Vec<Book> = store
            .rows
            .values()
            .filter(|b| matches_search(b, &needle))
            .cloned()
            .collect();
        let books = window.slice(&matching);
        Ok(BookPage {
            page_count: books.len() as i64,
            total_count: matching.len() as i64,
            books,
        })
    }

    async fn get_by_id(&self, id: i64) -> Result<Book, RepoError> {
        self.read()?
            .rows
            .get(&id)
            .cloned()
            .ok_or(RepoError::NotFound(id))
    }

    async fn create(&self, book: &mut Book) -> Result<(), RepoError> {
        let mut store = self.write()?;
        store.last_id += 1;
        book.id = store.last_id;
        store.rows.insert(book.id, book.clone());
        Ok(())
    }

    async fn update(&self, book: &Book) -> Result<(), RepoError> {
        let mut store = self.write()?;
        match store.rows.get_mut(&book.id) {
            Some(row) => {
                *row = book.clone();
                Ok(())
            }
            None => Err(RepoError::NotFound(book.id)),
        }
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        self.write()?
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound(id))
    }

    async fn ping(&self) -> Result<(), RepoError> {
        self.check_available()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(title: &str, author: &str) -> Book {
        Book {
            id: 0,
            title: title.into(),
            author: author.into(),
            isbn: String::new(),
        }
    }

    #[tokio::test]
    async fn ids_are_assigned_in_order_and_never_reused() {
        let repo = InMemoryBookRepository::new();
        let mut a = book("A", "x");
        let mut b = book("B", "x");
        repo.create(&mut a).await.unwrap();
        repo.delete(a.id).await.unwrap();
        repo.create(&mut b).await.unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
    }

    #[tokio::test]
    async fn search_covers_author() {
        let repo = InMemoryBookRepository::new();
        repo.create(&mut book("Dune", "Frank Herbert")).await.unwrap();
        repo.create(&mut book("Emma", "Jane Austen")).await.unwrap();
        let req = PaginationRequest {
            search: "AUSTEN".into(),
            ..Default::default()
        };
        let page = repo.list_all(&req).await.unwrap();
        assert_eq!(page.total_count, 1);
        assert_eq!(page.books[0].title, "Emma");
    }

    #[tokio::test]
    async fn unavailable_store_fails_every_operation() {
        let repo = InMemoryBookRepository::new();
        repo.set_available(false);
        assert!(matches!(repo.ping().await, Err(RepoError::Db(_))));
        assert!(matches!(repo.get_by_id(1).await, Err(RepoError::Db(_))));
        assert!(matches!(
            repo.list_all(&PaginationRequest::default()).await,
            Err(RepoError::Db(_))
        ));
        repo.set_available(true);
        assert!(repo.ping().await.is_ok());
    }

    #[tokio::test]
    async fn update_missing_is_not_found() {
        let repo = InMemoryBookRepository::new();
        let mut b = book("A", "x");
        b.id = 5;
        assert!(matches!(repo.update(&b).await, Err(RepoError::NotFound(5))));
    }
}
