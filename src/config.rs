use anyhow::{Context, Result};
use std::net::SocketAddr;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Web server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to (REGISTRY_BIND_ADDR)
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let raw = std::env::var("REGISTRY_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        Self::from_bind_addr(&raw)
    }

    pub fn from_bind_addr(raw: &str) -> Result<Self> {
        let bind_addr = raw
            .trim()
            .parse()
            .with_context(|| format!("invalid REGISTRY_BIND_ADDR: {:?}", raw))?;

        Ok(Self { bind_addr })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
        }
    }
}
