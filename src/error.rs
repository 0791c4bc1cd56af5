use std::io;
use std::net::SocketAddr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to bind to address {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[from] io::Error),
}

impl ServerError {
    pub fn bind(addr: SocketAddr, source: io::Error) -> Self {
        Self::Bind { addr, source }
    }
}

// Result type alias for convenience
pub type ServerResult<T> = Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_error_message() {
        let addr = SocketAddr::from(([0, 0, 0, 0], 3000));
        let err = ServerError::bind(addr, io::Error::from(io::ErrorKind::AddrInUse));
        let message = err.to_string();
        assert!(message.starts_with("Failed to bind to address 0.0.0.0:3000"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
