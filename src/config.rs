use std::env;
use std::net::SocketAddr;
use anyhow::{Context, Result};

/// Port used when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists (for local development)
        dotenvy::dotenv().ok();

        Self::from_port_var(env::var("PORT").ok())
    }

    /// Build the configuration from the raw value of `PORT`, if any.
    pub fn from_port_var(raw: Option<String>) -> Result<Self> {
        let port = match raw {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid port number, got {:?}", value))?,
            None => DEFAULT_PORT,
        };

        Self::validate_port(port)?;

        Ok(Config { port })
    }

    fn validate_port(port: u16) -> Result<()> {
        if port == 0 {
            anyhow::bail!("PORT must be greater than 0");
        }

        Ok(())
    }

    /// Listen on every interface at the configured port.
    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

impl Default for Config {
    fn default() -> Self {
        Config { port: DEFAULT_PORT }
    }
}
