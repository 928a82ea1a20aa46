pub mod ids;
pub mod time;

pub use ids::{new_message_id, normalize_message_id};
pub use self::time::now_timestamp;
