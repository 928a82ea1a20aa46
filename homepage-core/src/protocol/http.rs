use serde::{Deserialize, Serialize};

use crate::{error::Error, models::Message};
/*
    envelope http: { <dati>, status } in caso di successo, { error, status } in caso di errore.
    Le stringhe di status fanno parte del contratto con il frontend, non cambiarle.
*/
pub const STATUS_OK: &str = "all good";
pub const STATUS_RETRIEVE_FAILED: &str = "failed to retrieve messages from the database";
pub const STATUS_SAVE_FAILED: &str = "failed to save the message to the database";

// Save message (JSON o form url-encoded)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveMessageRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveMessageResponse {
    pub message: Message,
    pub status: String,
}

// List messages, usato anche per la ricerca per id (0 o 1 elementi)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMessagesResponse {
    pub messages: Vec<Message>,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: Error,
    pub status: String,
}

impl SaveMessageResponse {
    pub fn ok(message: Message) -> Self {
        Self { message, status: STATUS_OK.to_string() }
    }
}

impl ListMessagesResponse {
    pub fn ok(messages: Vec<Message>) -> Self {
        Self { messages, status: STATUS_OK.to_string() }
    }
}
