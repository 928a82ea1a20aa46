pub mod http;

// Re-export comodi
pub use http::{
    ErrorResponse, ListMessagesResponse, SaveMessageRequest, SaveMessageResponse,
    STATUS_OK, STATUS_RETRIEVE_FAILED, STATUS_SAVE_FAILED,
};
