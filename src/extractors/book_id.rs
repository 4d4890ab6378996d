//! Extract the numeric book id from the `{id}` path segment.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// Book id parsed from the path. Non-numeric ids reject with 400.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BookId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for BookId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        raw.trim().parse::<i64>().map(BookId).map_err(|_| {
            tracing::warn!(id = %raw, "invalid book ID");
            AppError::BadRequest("invalid book ID".into())
        })
    }
}
