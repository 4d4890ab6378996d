//! Health check: probes storage, always answers 200.

use crate::model::{StatusResponse, STATUS_DEGRADED, STATUS_ERROR, STATUS_OK};
use crate::state::AppState;
use axum::{extract::State, Json};
use chrono::{SecondsFormat, Utc};

pub fn version() -> String {
    format!("v{}", env!("CARGO_PKG_VERSION"))
}

/// GET /health. Degraded storage shows up in `status` only, never in the status code.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service reachable; `status` is `ok` or `degraded`", body = StatusResponse),
    )
)]
pub async fn health(State(state): State<AppState>) -> Json<StatusResponse> {
    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    let probe = tokio::time::timeout(state.health_timeout, state.repo.ping()).await;
    let healthy = match probe {
        Ok(Ok(())) => {
            tracing::debug!(%timestamp, "health check passed");
            true
        }
        Ok(Err(e)) => {
            tracing::error!(error = %e, "health check: storage ping failed");
            false
        }
        Err(_) => {
            tracing::error!(timeout = ?state.health_timeout, "health check: storage ping timed out");
            false
        }
    };
    let (status, message) = if healthy {
        (STATUS_OK, STATUS_OK)
    } else {
        (STATUS_DEGRADED, STATUS_ERROR)
    };
    Json(StatusResponse {
        status: status.to_string(),
        version: version(),
        timestamp,
        message: message.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RepoError;
    use crate::model::{Book, BookPage, PaginationRequest};
    use crate::repository::{BookRepository, InMemoryBookRepository};
    use async_trait::async_trait;
    use std::time::Duration;

    struct SlowPing;

    #[async_trait]
    impl BookRepository for SlowPing {
        async fn list_all(&self, _: &PaginationRequest) -> Result<BookPage, RepoError> {
            Ok(BookPage::default())
        }
        async fn get_by_id(&self, id: i64) -> Result<Book, RepoError> {
            Err(RepoError::NotFound(id))
        }
        async fn create(&self, _: &mut Book) -> Result<(), RepoError> {
            Ok(())
        }
        async fn update(&self, book: &Book) -> Result<(), RepoError> {
            Err(RepoError::NotFound(book.id))
        }
        async fn delete(&self, id: i64) -> Result<(), RepoError> {
            Err(RepoError::NotFound(id))
        }
        async fn ping(&self) -> Result<(), RepoError> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(())
        }
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let state = AppState::new(InMemoryBookRepository::new());
        let Json(body) = health(State(state)).await;
        assert_eq!(body.status, "ok");
        assert_eq!(body.message, "ok");
        assert_eq!(body.version, version());
        assert!(chrono::DateTime::parse_from_rfc3339(&body.timestamp).is_ok());
    }

    #[tokio::test]
    async fn failed_ping_is_degraded() {
        let repo = InMemoryBookRepository::new();
        repo.set_available(false);
        let Json(body) = health(State(AppState::new(repo))).await;
        assert_eq!(body.status, "degraded");
        assert_eq!(body.message, "error");
    }

    #[tokio::test]
    async fn slow_ping_is_degraded() {
        let state = AppState::new(SlowPing).with_health_timeout(Duration::from_millis(20));
        let Json(body) = health(State(state)).await;
        assert_eq!(body.status, "degraded");
    }
}
