//! HTTP handlers for book CRUD and health.

pub mod books;
pub mod health;
pub use books::*;
pub use health::*;
