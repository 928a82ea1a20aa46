use anyhow::Context;
use axum::http::StatusCode;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

pub mod config;
pub mod controllers;
pub mod routes;
pub mod store;

pub use config::{Config, RunMode};
pub use store::{MessageStore, SqliteMessageStore, StoreError};

pub const MEMORY_URL: &str = "sqlite::memory:";

#[derive(Clone)]
pub struct AppState {
    /// Unico handle allo store, creato all'avvio.
    pub store: Arc<dyn MessageStore>,
    pub expose_error_details: bool,
}

impl AppState {
    pub fn new(store: Arc<dyn MessageStore>, expose_error_details: bool) -> Self {
        Self { store, expose_error_details }
    }
}

// Dato un percorso di file, restituisce un URL SQLite valido. Crea le directory genitrici se non esistono.
pub fn sqlite_url_for_path(p: &Path) -> anyhow::Result<String> {
    let abs = if p.is_absolute() {
        p.to_path_buf()
    } else {
        std::env::current_dir()?.join(p)
    };
    if let Some(parent) = abs.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create parent dirs for {:?}", parent))?;
    }
    let s = abs.to_string_lossy().replace('\\', "/");
    Ok(format!("sqlite://{}", s))
}

/// Trasforma il valore di DB_CONNECTION_STRING / DATABASE_URL in un URL SQLite.
/// "sqlite::memory:" passa invariato, i prefissi "sqlite://" vengono tolti per ottenere il percorso.
pub fn build_sqlite_url(raw: &str) -> anyhow::Result<String> {
    if raw == MEMORY_URL {
        return Ok(raw.to_string());
    }
    let path_part = raw
        .trim_start_matches("sqlite:///")
        .trim_start_matches("sqlite://")
        .trim_start_matches("sqlite:");
    // "sqlite:///abs/path" perde lo slash iniziale con il trim sopra
    let path = if raw.starts_with("sqlite:///") {
        PathBuf::from(format!("/{}", path_part))
    } else {
        PathBuf::from(path_part)
    };
    sqlite_url_for_path(&path)
}

// Connect to the database and return a connection pool.
pub async fn connect_pool(db_url: &str) -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(db_url)
        .with_context(|| format!("parse sqlite url {}", db_url))?
        .create_if_missing(true);

    // ogni connessione a :memory: vede un database diverso, quindi una sola connessione che non scade
    let pool_options = if db_url == MEMORY_URL {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new()
    };

    let pool = pool_options
        .connect_with(options)
        .await
        .with_context(|| format!("connect to sqlite via {}", db_url))?;
    Ok(pool)
}

// Crea la tabella dei messaggi se non esiste.
pub async fn run_migrations(pool: &SqlitePool) -> anyhow::Result<()> {
    let stmts = [
        r#"
        CREATE TABLE IF NOT EXISTS messages (
            message_id TEXT PRIMARY KEY,
            name       TEXT NOT NULL,
            message    TEXT NOT NULL,
            created_at TEXT NOT NULL
        );"#,
    ];
    for s in &stmts {
        sqlx::query(s)
            .execute(pool)
            .await
            .with_context(|| format!("apply migration: {}", &s[..s.len().min(40)].replace('\n', " ")))?;
    }
    Ok(())
}

/// Controlla lo stato di salute dello store.
pub async fn health(state: &AppState) -> StatusCode {
    match state.store.ping().await {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "health check failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
