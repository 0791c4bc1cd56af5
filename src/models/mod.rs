// Models module
// Response payloads returned by the informational endpoints

pub mod health;
pub mod hello;
pub mod root;
pub mod timestamp;

// Re-export commonly used types
pub use health::HealthInfo;
pub use hello::HelloInfo;
pub use root::RootInfo;
