use serde::{Deserialize, Serialize};

/// Tipo di errore esposto sul wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Il database non ha risposto o ha rifiutato l'operazione.
    StorageError,
    /// Input malformato (es. id che non è un UUID, body non decodificabile).
    InvalidInput,
}

/// Errore condiviso tra server e client, finisce nel campo `error` degli envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Error {
    pub code: ErrorCode,

    pub message: String,
}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }

    /// Copia senza dettagli interni: resta solo il codice con un testo generico.
    pub fn redacted(&self) -> Self {
        let message = match self.code {
            ErrorCode::StorageError => "internal storage error",
            ErrorCode::InvalidInput => "invalid input",
        };
        Self::new(self.code, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.code, self.message)
    }
}

impl std::error::Error for Error {}
