use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use crate::error::{ServerError, ServerResult};

/// Bind the listening socket. Failure here is fatal for the process.
pub async fn bind(addr: SocketAddr) -> ServerResult<TcpListener> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| ServerError::bind(addr, e))?;

    match listener.local_addr() {
        Ok(local) => info!("Server listening on {}", local),
        Err(_) => info!("Server listening on {}", addr),
    }

    Ok(listener)
}

/// Serve requests on `listener` until the server fails.
pub async fn run(listener: TcpListener, app: Router) -> ServerResult<()> {
    axum::serve(listener, app).await?;
    Ok(())
}
