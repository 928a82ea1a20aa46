pub mod about;
pub mod message;

// Re-export per comodità
pub use about::AboutContent;
pub use message::Message;
