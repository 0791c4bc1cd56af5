// Library root for the hello REST API

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod server;
pub mod state;

// Re-export commonly used types
pub use config::Config;
pub use error::ServerError;
pub use models::{HealthInfo, HelloInfo, RootInfo};
pub use routes::create_router;
pub use state::AppState;
