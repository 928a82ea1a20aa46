use std::net::SocketAddr;

use anyhow::{bail, Context};
use tracing::info;

pub const DEFAULT_PORT: u16 = 5002;
pub const DEFAULT_DATABASE: &str = "homepage.db";

/// Modalità di esecuzione, letta da APP_ENV (o NODE_ENV).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Development,
    Production,
    Test,
}

impl RunMode {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => RunMode::Production,
            "test" => RunMode::Test,
            _ => RunMode::Development,
        }
    }

    /// In test il log delle richieste è spento.
    pub fn request_logging(&self) -> bool {
        *self != RunMode::Test
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Percorso o URL SQLite così come arriva dall'ambiente.
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub mode: RunMode,
    /// Se false il campo `error` delle risposte non contiene dettagli interni.
    pub expose_error_details: bool,
}

impl Config {
    /// Legge la configurazione dalle variabili d'ambiente (chiamare `dotenvy::dotenv()` prima).
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url = get("DB_CONNECTION_STRING")
            .or_else(|| get("DATABASE_URL"))
            .unwrap_or_else(|| {
                info!("DB_CONNECTION_STRING not set, using default: {DEFAULT_DATABASE}");
                DEFAULT_DATABASE.to_string()
            });

        let mode = get("APP_ENV")
            .or_else(|| get("NODE_ENV"))
            .map(|m| RunMode::parse(&m))
            .unwrap_or(RunMode::Development);

        let port = match get("PORT") {
            Some(raw) => raw.trim().parse::<u16>().with_context(|| format!("parse PORT {raw:?}"))?,
            None => DEFAULT_PORT,
        };

        let bind_addr = match get("BIND_ADDR") {
            Some(raw) => raw.trim().parse().with_context(|| format!("parse BIND_ADDR {raw:?}"))?,
            None => SocketAddr::from(([127, 0, 0, 1], port)),
        };

        let expose_error_details = match get("EXPOSE_ERROR_DETAILS") {
            Some(raw) => parse_flag(&raw).with_context(|| format!("parse EXPOSE_ERROR_DETAILS {raw:?}"))?,
            None => mode != RunMode::Production,
        };

        Ok(Self { database_url, bind_addr, mode, expose_error_details })
    }
}

fn parse_flag(raw: &str) -> anyhow::Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("expected a boolean, got {other:?}"),
    }
}
