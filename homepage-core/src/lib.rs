//! homepage-core: tipi condivisi tra client e server (modelli, envelope HTTP, errori, stato della pagina About).
//! Niente I/O o dipendenze non compatibili con WASM.

pub mod models;
pub mod protocol;
pub mod error;
pub mod utils;
pub mod view;

// Re-export utili per ridurre i percorsi nei crate client/server
pub use error::{Error, ErrorCode};
pub use models::{about::AboutContent, message::Message};
pub use protocol::http::{
    ErrorResponse, ListMessagesResponse, SaveMessageRequest, SaveMessageResponse,
    STATUS_OK, STATUS_RETRIEVE_FAILED, STATUS_SAVE_FAILED,
};
pub use utils::{new_message_id, normalize_message_id, now_timestamp};
pub use view::about::{AboutState, FETCH_FAILED};
