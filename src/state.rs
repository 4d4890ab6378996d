//! Shared application state for all routes. The repository is injected, never global.

use crate::repository::BookRepository;
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_HEALTH_TIMEOUT: Duration = Duration::from_secs(2);

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn BookRepository>,
    /// Upper bound on the storage probe in `GET /health`.
    pub health_timeout: Duration,
}

impl AppState {
    pub fn new(repo: impl BookRepository + 'static) -> Self {
        Self {
            repo: Arc::new(repo),
            health_timeout: DEFAULT_HEALTH_TIMEOUT,
        }
    }

    pub fn with_health_timeout(mut self, timeout: Duration) -> Self {
        self.health_timeout = timeout;
        self
    }
}
