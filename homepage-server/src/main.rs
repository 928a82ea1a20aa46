use anyhow::Context;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use homepage_server::{
    build_sqlite_url, connect_pool, routes, run_migrations, AppState, Config, SqliteMessageStore,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env è opzionale
    dotenvy::dotenv().ok();

    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env().context("load configuration")?;
    info!(mode = ?config.mode, "configuration loaded");

    let db_url = build_sqlite_url(&config.database_url).context("build sqlite DATABASE_URL")?;
    info!("Using database {}", db_url);
    let pool = connect_pool(&db_url).await.context("connect to sqlite")?;
    run_migrations(&pool).await.context("run migrations")?;
    info!("Connected to database");

    let store = Arc::new(SqliteMessageStore::new(pool));
    let state = Arc::new(AppState::new(store, config.expose_error_details));
    let app = routes::router(state, config.mode.request_logging());

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .context("bind tcp listener")?;
    info!("Listening on http://{}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server shutdown")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
