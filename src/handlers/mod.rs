// Handlers module
// HTTP handlers for the informational endpoints

pub mod health;
pub mod info;

pub use health::health_check;
pub use info::{hello, root};
