pub mod about;

pub use about::{AboutState, FETCH_FAILED};
