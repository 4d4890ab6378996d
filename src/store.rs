//! Connection pool setup and books table DDL.

use crate::config::DbConfig;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const DDL_TIMEOUT: Duration = Duration::from_secs(3);

const BOOKS_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS books (
        id BIGSERIAL PRIMARY KEY,
        title TEXT NOT NULL,
        author TEXT NOT NULL,
        isbn TEXT NOT NULL
    )
"#;

/// Open the pool and verify one connection within [`CONNECT_TIMEOUT`].
pub async fn connect(cfg: &DbConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs))
        .connect_lazy_with(cfg.connect_options()?);

    tokio::time::timeout(CONNECT_TIMEOUT, sqlx::query("SELECT 1").execute(&pool))
        .await
        .map_err(|_| sqlx::Error::PoolTimedOut)??;
    tracing::info!(host = %cfg.display_host(), "connected to database");
    Ok(pool)
}

/// Create the books table if it does not exist.
pub async fn ensure_books_table(pool: &PgPool) -> Result<(), sqlx::Error> {
    tokio::time::timeout(DDL_TIMEOUT, sqlx::query(BOOKS_DDL).execute(pool))
        .await
        .map_err(|_| sqlx::Error::PoolTimedOut)??;
    Ok(())
}
