use tracing::{error, info};

use hello_rest_api::{config::Config, middleware::init_tracing, routes::create_router, server, state::AppState};

#[tokio::main]
async fn main() {
    // Capture the start instant before anything else so uptime covers startup
    let state = AppState::new();

    // Initialize structured logging
    if let Err(e) = init_tracing() {
        eprintln!("Failed to initialize tracing: {}", e);
        std::process::exit(1);
    }

    // Load configuration from environment
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    info!("🚀 Server starting on port {}", config.port);

    let app = create_router(state);

    let listener = match server::bind(config.bind_address()).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = server::run(listener, app).await {
        error!("{}", e);
        std::process::exit(1);
    }
}
