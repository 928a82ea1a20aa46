//! Accesso ai messaggi del guestbook.
//!
//! Il resto del server vede solo il trait [`MessageStore`]: l'handle viene costruito
//! una volta in `main` e passato agli handler dentro `AppState`.

use async_trait::async_trait;
use homepage_core::{new_message_id, normalize_message_id, now_timestamp, ErrorCode, Message};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Connessione o scrittura fallita.
    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),

    /// L'id non è nel formato usato dallo store (UUID).
    #[error("invalid message id: {0:?}")]
    InvalidInput(String),
}

impl From<&StoreError> for homepage_core::Error {
    fn from(err: &StoreError) -> Self {
        let code = match err {
            StoreError::Storage(_) => ErrorCode::StorageError,
            StoreError::InvalidInput(_) => ErrorCode::InvalidInput,
        };
        homepage_core::Error::new(code, err.to_string())
    }
}

#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Salva un nuovo messaggio assegnando id e createdAt.
    async fn insert(&self, name: &str, message: &str) -> Result<Message, StoreError>;

    /// Tutti i messaggi, in ordine di inserimento. Store vuoto -> vec vuoto.
    async fn find_all(&self) -> Result<Vec<Message>, StoreError>;

    /// 0 o 1 messaggi. Un id ben formato ma inesistente non è un errore.
    async fn find_by_id(&self, id: &str) -> Result<Vec<Message>, StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;
}

pub struct SqliteMessageStore {
    pool: SqlitePool,
}

impl SqliteMessageStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

// converte una riga della tabella messages nel modello condiviso
fn message_from_row(row: &SqliteRow) -> Result<Message, sqlx::Error> {
    Ok(Message {
        id: row.try_get("message_id")?,
        name: row.try_get("name")?,
        message: row.try_get("message")?,
        created_at: row.try_get("created_at")?,
    })
}

#[async_trait]
impl MessageStore for SqliteMessageStore {
    async fn insert(&self, name: &str, message: &str) -> Result<Message, StoreError> {
        let stored = Message {
            id: new_message_id(),
            name: name.to_string(),
            message: message.to_string(),
            created_at: now_timestamp(),
        };

        sqlx::query("INSERT INTO messages (message_id, name, message, created_at) VALUES (?, ?, ?, ?)")
            .bind(&stored.id)
            .bind(&stored.name)
            .bind(&stored.message)
            .bind(&stored.created_at)
            .execute(&self.pool)
            .await?;

        Ok(stored)
    }

    async fn find_all(&self) -> Result<Vec<Message>, StoreError> {
        let rows = sqlx::query("SELECT message_id, name, message, created_at FROM messages ORDER BY rowid")
            .fetch_all(&self.pool)
            .await?;

        let messages = rows
            .iter()
            .map(message_from_row)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(messages)
    }

    async fn find_by_id(&self, id: &str) -> Result<Vec<Message>, StoreError> {
        let id = normalize_message_id(id).ok_or_else(|| StoreError::InvalidInput(id.to_string()))?;

        let row = sqlx::query("SELECT message_id, name, message, created_at FROM messages WHERE message_id = ?")
            .bind(&id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(r) => Ok(vec![message_from_row(&r)?]),
            None => Ok(Vec::new()),
        }
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.pool.acquire().await?;
        Ok(())
    }
}
