use serde::{Deserialize, Serialize};

/// Messaggio del guestbook, persistito dal server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// UUIDv4 assegnato dallo store, `_id` accettato in lettura
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub message: String,
    pub created_at: String, // RFC3339 UTC
}
