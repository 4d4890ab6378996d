//! Builds parameterized COUNT, SELECT, INSERT, UPDATE, DELETE for the books table.

use crate::model::Book;
use crate::pagination::PageWindow;
use crate::sql::params::BindValue;

pub const BOOKS_TABLE: &str = "books";

/// Columns in row order. `id` is cast so SERIAL and BIGSERIAL tables both decode to i64.
const SELECT_COLUMNS: &str = "id::BIGINT AS id, title, author, isbn";

/// Quote identifier for PostgreSQL (safe: only from constants).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

fn table() -> String {
    quoted(BOOKS_TABLE)
}

#[derive(Debug)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<BindValue>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: impl Into<BindValue>) -> usize {
        self.params.push(v.into());
        self.params.len()
    }
}

/// Escape LIKE metacharacters so the search matches literally.
pub fn escape_like(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// WHERE predicate shared by the count and page queries.
/// The search is bound once and matched against title or author.
fn search_predicate(q: &mut QueryBuf, search: &str) -> String {
    let mut clauses = vec![String::from("1=1")];
    let search = search.trim();
    if !search.is_empty() {
        let n = q.push_param(format!("%{}%", escape_like(search)));
        clauses.push(format!(
            "(title ILIKE ${n} ESCAPE '\\' OR author ILIKE ${n} ESCAPE '\\')"
        ));
    }
    clauses.join(" AND ")
}

/// COUNT(*) of rows matching the search, ignoring pagination.
pub fn count_books(search: &str) -> QueryBuf {
    let mut q = QueryBuf::new();
    let predicate = search_predicate(&mut q, search);
    q.sql = format!("SELECT COUNT(*) FROM {} WHERE {}", table(), predicate);
    q
}

/// One page of rows matching the search, ordered by id.
pub fn select_books_page(search: &str, window: PageWindow) -> QueryBuf {
    let mut q = QueryBuf::new();
    let predicate = search_predicate(&mut q, search);
    let limit = q.push_param(window.limit);
    let offset = q.push_param(window.offset);
    q.sql = format!(
        "SELECT {} FROM {} WHERE {} ORDER BY id LIMIT ${} OFFSET ${}",
        SELECT_COLUMNS,
        table(),
        predicate,
        limit,
        offset
    );
    q
}

pub fn select_book_by_id(id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(id);
    q.sql = format!("SELECT {} FROM {} WHERE id = ${}", SELECT_COLUMNS, table(), n);
    q
}

/// INSERT title, author, isbn. The id column is left to storage and returned.
pub fn insert_book(book: &Book) -> QueryBuf {
    let mut q = QueryBuf::new();
    let title = q.push_param(book.title.as_str());
    let author = q.push_param(book.author.as_str());
    let isbn = q.push_param(book.isbn.as_str());
    q.sql = format!(
        "INSERT INTO {} (title, author, isbn) VALUES (${}, ${}, ${}) RETURNING id::BIGINT AS id",
        table(),
        title,
        author,
        isbn
    );
    q
}

/// Overwrite all fields of the row with `book.id`.
pub fn update_book(book: &Book) -> QueryBuf {
    let mut q = QueryBuf::new();
    let title = q.push_param(book.title.as_str());
    let author = q.push_param(book.author.as_str());
    let isbn = q.push_param(book.isbn.as_str());
    let id = q.push_param(book.id);
    q.sql = format!(
        "UPDATE {} SET title = ${}, author = ${}, isbn = ${} WHERE id = ${}",
        table(),
        title,
        author,
        isbn,
        id
    );
    q
}

pub fn delete_book(id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(id);
    q.sql = format!("DELETE FROM {} WHERE id = ${}", table(), n);
    q
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_without_search_has_no_params() {
        let q = count_books("");
        assert_eq!(q.sql, r#"SELECT COUNT(*) FROM "books" WHERE 1=1"#);
        assert!(q.params.is_empty());
    }

    #[test]
    fn whitespace_search_is_no_filter() {
        let q = count_books("   ");
        assert!(q.params.is_empty());
        assert!(!q.sql.contains("ILIKE"));
    }

    #[test]
    fn search_binds_title_and_author_to_one_param() {
        let q = count_books("dun");
        assert_eq!(
            q.sql,
            r#"SELECT COUNT(*) FROM "books" WHERE 1=1 AND (title ILIKE $1 ESCAPE '\' OR author ILIKE $1 ESCAPE '\')"#
        );
        assert_eq!(q.params, vec![BindValue::Text("%dun%".into())]);
    }

    #[test]
    fn search_value_is_never_interpolated() {
        let q = count_books("'; DROP TABLE books; --");
        assert!(!q.sql.contains("DROP"));
        assert_eq!(q.params.len(), 1);
    }

    #[test]
    fn like_metacharacters_are_escaped() {
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
        let q = count_books("100%");
        assert_eq!(q.params, vec![BindValue::Text("%100\\%%".into())]);
    }

    #[test]
    fn page_params_follow_search_param() {
        let q = select_books_page("dune", PageWindow::new(3, 2));
        assert!(q.sql.ends_with("ORDER BY id LIMIT $2 OFFSET $3"));
        assert_eq!(
            q.params,
            vec![
                BindValue::Text("%dune%".into()),
                BindValue::Int(2),
                BindValue::Int(4),
            ]
        );
    }

    #[test]
    fn page_without_search_starts_at_first_placeholder() {
        let q = select_books_page("", PageWindow::new(1, 0));
        assert_eq!(
            q.sql,
            r#"SELECT id::BIGINT AS id, title, author, isbn FROM "books" WHERE 1=1 ORDER BY id LIMIT $1 OFFSET $2"#
        );
        assert_eq!(q.params, vec![BindValue::Int(10), BindValue::Int(0)]);
    }

    #[test]
    fn insert_ignores_book_id() {
        let book = Book {
            id: 42,
            title: "Dune".into(),
            author: "Frank Herbert".into(),
            isbn: "9780441013593".into(),
        };
        let q = insert_book(&book);
        assert!(q.sql.starts_with(r#"INSERT INTO "books" (title, author, isbn) VALUES ($1, $2, $3)"#));
        assert!(!q.params.contains(&BindValue::Int(42)));
    }

    #[test]
    fn update_binds_id_last() {
        let book = Book {
            id: 7,
            title: "T".into(),
            author: "A".into(),
            isbn: "I".into(),
        };
        let q = update_book(&book);
        assert_eq!(
            q.sql,
            r#"UPDATE "books" SET title = $1, author = $2, isbn = $3 WHERE id = $4"#
        );
        assert_eq!(q.params.last(), Some(&BindValue::Int(7)));
    }

    #[test]
    fn by_id_statements() {
        assert_eq!(select_book_by_id(3).params, vec![BindValue::Int(3)]);
        assert_eq!(delete_book(3).sql, r#"DELETE FROM "books" WHERE id = $1"#);
    }
}
