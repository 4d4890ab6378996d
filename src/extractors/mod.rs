//! Request extractors for path ids and JSON bodies.

pub mod book_id;
pub mod json;

pub use book_id::BookId;
pub use json::JsonBody;
