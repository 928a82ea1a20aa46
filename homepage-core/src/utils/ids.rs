use uuid::Uuid;

/// Genera un nuovo id di messaggio unico (UUIDv4) come stringa.
pub fn new_message_id() -> String {
    Uuid::new_v4().to_string()
}

/// Riporta un id nella forma canonica (minuscolo, con trattini).
/// `None` se la stringa non è un UUID.
pub fn normalize_message_id(raw: &str) -> Option<String> {
    Uuid::parse_str(raw.trim()).ok().map(|id| id.to_string())
}
