//! Public library server: loads config, opens the pool, ensures the books table, serves `/api/v1`.
//!
//! Run from repo root: `cargo run -p public-library-server`

use public_library::{app, config, connect, ensure_books_table, AppState, PgBookRepository};
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::timeout::TimeoutLayer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(
                    "public_library=info,public_library_server=info,tower_http=info",
                )
            }),
        )
        .init();

    let cfg = config::load()?;
    let pool = connect(&cfg.db).await?;
    ensure_books_table(&pool).await?;

    let state = AppState::new(PgBookRepository::new(pool))
        .with_health_timeout(Duration::from_secs(cfg.server.health_timeout_secs));
    let router = app(state).layer(TimeoutLayer::new(Duration::from_secs(
        cfg.server.request_timeout_secs,
    )));

    let listener = TcpListener::bind(cfg.server.bind_addr()).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
